use axum::{extract::State, Extension, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::streak::{Streak, StreakResponse};
use crate::services::streak::{update_streak, StreakState};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateStreakRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStreakResponse {
    pub message: &'static str,
    pub current_streak: i32,
    pub last_entry_date: NaiveDate,
    pub longest_streak: i32,
}

pub async fn get_streak(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<StreakResponse>> {
    let streak = sqlx::query_as::<_, Streak>("SELECT * FROM streaks WHERE user_id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?;

    // Accounts created before streak provisioning may lack a row; create it
    // lazily with zero counters.
    let streak = match streak {
        Some(streak) => streak,
        None => {
            sqlx::query_as::<_, Streak>(
                r#"
                INSERT INTO streaks (id, user_id, current_streak, last_entry_date, longest_streak)
                VALUES ($1, $2, 0, NULL, 0)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(auth_user.id)
            .fetch_one(&state.db)
            .await?
        }
    };

    Ok(Json(streak.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateStreakRequest>,
) -> AppResult<Json<UpdateStreakResponse>> {
    let row = sqlx::query_as::<_, Streak>("SELECT * FROM streaks WHERE user_id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?;

    let prior = row.map(|r| StreakState {
        current_streak: r.current_streak,
        last_entry_date: r.last_entry_date,
        longest_streak: r.longest_streak,
    });

    let outcome = update_streak(prior, body.date);

    if outcome.already_recorded_today {
        return Ok(Json(UpdateStreakResponse {
            message: "Today already recorded",
            current_streak: outcome.current_streak,
            last_entry_date: outcome.last_entry_date,
            longest_streak: outcome.longest_streak,
        }));
    }

    sqlx::query(
        r#"
        INSERT INTO streaks (id, user_id, current_streak, last_entry_date, longest_streak)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE SET
            current_streak = $3,
            last_entry_date = $4,
            longest_streak = $5,
            updated_at = NOW()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(outcome.current_streak)
    .bind(outcome.last_entry_date)
    .bind(outcome.longest_streak)
    .execute(&state.db)
    .await?;

    Ok(Json(UpdateStreakResponse {
        message: "Streak updated successfully",
        current_streak: outcome.current_streak,
        last_entry_date: outcome.last_entry_date,
        longest_streak: outcome.longest_streak,
    }))
}
