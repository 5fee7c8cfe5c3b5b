use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::history::HistoryEntry;
use crate::state::AppState;

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.history.load().await))
}

/// DELETE /api/v1/history/:id
/// Idempotent: deleting an absent id still returns 204.
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.history.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/history
pub async fn handle_clear_history(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.history.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
