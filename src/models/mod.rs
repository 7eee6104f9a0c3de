pub mod day_entry;
pub mod streak;
pub mod user;
