//! Handlers serving the HTML form fragments for a case's points.
//!
//! The fragment building itself is pure (`tablilla_core::forms`); these
//! handlers only load the rows and map them to view models.

use axum::extract::{Path, State};
use axum::response::Html;
use tablilla_core::error::CoreError;
use tablilla_core::forms::{self, PointView};
use tablilla_core::types::DbId;
use tablilla_db::repositories::{CaseRepo, PointRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/cases/{id}/forms/salida
///
/// Radio-button rows for the salida entry form, sorted by label.
pub async fn salida_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let views = point_views(&state, id).await?;
    Ok(Html(forms::build_salida_form(&views)))
}

/// GET /api/v1/cases/{id}/forms/entrada
///
/// Entrada entry rows, each showing the prior salida answer.
pub async fn entrada_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let views = point_views(&state, id).await?;
    Ok(Html(forms::build_entrada_form(&views)))
}

/// GET /api/v1/cases/{id}/forms/closed
///
/// Read-only two-column summary table for a closed case.
pub async fn closed_table(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let views = point_views(&state, id).await?;
    Ok(Html(forms::build_closed_table(&views)))
}

/// Load a case's points as view models, or fail with 404.
async fn point_views(state: &AppState, id: DbId) -> Result<Vec<PointView>, AppError> {
    CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InspectionCase",
            id,
        }))?;
    let points = PointRepo::list_by_case(&state.pool, id).await?;
    Ok(points.iter().map(PointView::from).collect())
}
