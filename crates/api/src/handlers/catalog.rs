//! Handlers for the `/catalog` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tablilla_db::repositories::CatalogRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog
///
/// List the global checklist template in seeding order (group then
/// position, ungrouped entries first).
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = CatalogRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}
