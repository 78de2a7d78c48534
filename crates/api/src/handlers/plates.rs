//! Handlers for plate-scoped case lookups.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tablilla_db::repositories::CaseRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plates/{plate}/latest
///
/// The most recently created case for a plate, any status. The plate is
/// normalized before lookup; `data` is `null` when the plate has no cases.
pub async fn latest(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<impl IntoResponse> {
    let case = CaseRepo::find_latest_by_plate(&state.pool, &plate).await?;
    Ok(Json(DataResponse { data: case }))
}

/// GET /api/v1/plates/{plate}/closed
///
/// Closed-case history for a plate, newest first.
pub async fn closed_history(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> AppResult<impl IntoResponse> {
    let cases = CaseRepo::list_closed_by_plate(&state.pool, &plate).await?;
    Ok(Json(DataResponse { data: cases }))
}
