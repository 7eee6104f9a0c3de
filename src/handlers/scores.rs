use axum::{extract::State, Extension, Json};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::models::day_entry::DayEntry;
use crate::services::health_score::{compute_score, HealthScoreResult};
use crate::AppState;

/// Weekly health score over the trailing 7-day window, most recent first.
pub async fn get_health_score(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<HealthScoreResult>> {
    let window_start = Utc::now().date_naive() - chrono::Duration::days(7);

    let entries = sqlx::query_as::<_, DayEntry>(
        r#"
        SELECT * FROM day_entries
        WHERE user_id = $1 AND entry_date >= $2
        ORDER BY entry_date DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(window_start)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(compute_score(&entries)))
}
