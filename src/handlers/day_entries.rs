use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, DayEntryQuery, SaveDayRequest};
use crate::AppState;

pub async fn upsert_day_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SaveDayRequest>,
) -> AppResult<Json<DayEntry>> {
    let data = body.data;

    if let Some(mood) = data.mood {
        if !(1..=10).contains(&mood) {
            return Err(AppError::Validation("Mood must be between 1 and 10".into()));
        }
    }
    if let Some(level) = data.activity_level {
        if !(1..=10).contains(&level) {
            return Err(AppError::Validation(
                "Activity level must be between 1 and 10".into(),
            ));
        }
    }
    if let Some(hours) = data.sleep_hours {
        if !(0.0..=24.0).contains(&hours) {
            return Err(AppError::Validation(
                "Sleep hours must be between 0 and 24".into(),
            ));
        }
    }

    // Last-write-wins: a resubmitted day replaces every field, including
    // ones the new payload leaves unset.
    let entry = sqlx::query_as::<_, DayEntry>(
        r#"
        INSERT INTO day_entries (
            id, user_id, entry_date, sleep_hours, sleep_quality, water_intake,
            mood, activity_level, notes, sleep_issues, dehydration_symptoms,
            mood_related, activity_issues, negative_factors
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET
            sleep_hours = $4,
            sleep_quality = $5,
            water_intake = $6,
            mood = $7,
            activity_level = $8,
            notes = $9,
            sleep_issues = $10,
            dehydration_symptoms = $11,
            mood_related = $12,
            activity_issues = $13,
            negative_factors = $14,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.date)
    .bind(data.sleep_hours)
    .bind(data.sleep_quality)
    .bind(data.water_intake)
    .bind(data.mood)
    .bind(data.activity_level)
    .bind(&data.notes)
    .bind(&data.sleep_issues)
    .bind(&data.dehydration_symptoms)
    .bind(&data.mood_related)
    .bind(&data.activity_issues)
    .bind(&data.negative_factors)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn get_day_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<DayEntry>> {
    let entry = sqlx::query_as::<_, DayEntry>(
        "SELECT * FROM day_entries WHERE user_id = $1 AND entry_date = $2",
    )
    .bind(auth_user.id)
    .bind(date)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Entry not found".into()))?;

    Ok(Json(entry))
}

pub async fn list_day_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<DayEntryQuery>,
) -> AppResult<Json<Vec<DayEntry>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - chrono::Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());

    let entries = sqlx::query_as::<_, DayEntry>(
        r#"
        SELECT * FROM day_entries
        WHERE user_id = $1 AND entry_date BETWEEN $2 AND $3
        ORDER BY entry_date DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}
