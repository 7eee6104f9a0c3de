use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One user's wellness metrics for a single calendar date.
///
/// Every metric is optional: a field that was never recorded stays `None`,
/// which is distinct from a recorded low value. The health score only
/// counts an entry toward a category when that category's field is present.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<SleepQuality>,
    pub water_intake: Option<WaterIntake>,
    pub mood: Option<i32>,
    pub activity_level: Option<i32>,
    pub notes: Option<String>,
    pub sleep_issues: Vec<String>,
    pub dehydration_symptoms: Vec<String>,
    pub mood_related: Vec<String>,
    pub activity_issues: Vec<String>,
    pub negative_factors: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "sleep_quality", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SleepQuality {
    SleptWell,
    PoorSleep,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "water_intake", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WaterIntake {
    Enough,
    TooLittle,
}

/// POST /api/day body: the target date plus the metrics recorded for it.
#[derive(Debug, Deserialize)]
pub struct SaveDayRequest {
    pub date: NaiveDate,
    pub data: DayEntryData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntryData {
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<SleepQuality>,
    pub water_intake: Option<WaterIntake>,
    pub mood: Option<i32>,
    pub activity_level: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub sleep_issues: Vec<String>,
    #[serde(default)]
    pub dehydration_symptoms: Vec<String>,
    #[serde(default)]
    pub mood_related: Vec<String>,
    #[serde(default)]
    pub activity_issues: Vec<String>,
    #[serde(default)]
    pub negative_factors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DayEntryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
