pub mod auth;
pub mod day_entries;
pub mod health;
pub mod scores;
pub mod streaks;
