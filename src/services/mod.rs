pub mod health_score;
pub mod streak;
