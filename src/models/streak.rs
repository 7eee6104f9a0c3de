use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user streak row. One row per user, enforced by a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Streak {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_streak: i32,
    pub last_entry_date: Option<NaiveDate>,
    pub longest_streak: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResponse {
    pub current_streak: i32,
    pub last_entry_date: Option<NaiveDate>,
    pub longest_streak: i32,
}

impl From<Streak> for StreakResponse {
    fn from(s: Streak) -> Self {
        Self {
            current_streak: s.current_streak,
            last_entry_date: s.last_entry_date,
            longest_streak: s.longest_streak,
        }
    }
}
