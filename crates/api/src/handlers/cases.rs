//! Handlers for the `/cases` resource: case lifecycle and checklist
//! answer saves.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tablilla_core::error::CoreError;
use tablilla_core::forms;
use tablilla_core::phase::Phase;
use tablilla_core::plate;
use tablilla_core::types::DbId;
use tablilla_db::models::case::{InspectionCase, OpenCaseRequest};
use tablilla_db::repositories::{CaseRepo, PointRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the entrada save.
#[derive(Debug, Deserialize)]
pub struct SaveEntradaParams {
    /// Close the case after saving (default: true).
    #[serde(default = "default_auto_close")]
    pub auto_close: bool,
}

fn default_auto_close() -> bool {
    true
}

/// Result of a salida/entrada save: the re-read case plus answer counts.
///
/// `answers_dropped` counts posted answers whose point key matched no row
/// for this case (they are skipped, not errors).
#[derive(Debug, Serialize)]
pub struct SaveResult {
    pub case: InspectionCase,
    pub answers_saved: usize,
    pub answers_dropped: usize,
}

/// POST /api/v1/cases
///
/// Resolve the open case for a plate, creating (and seeding) one if needed.
/// Returns 201 when a case was created, 200 when an existing one was found.
pub async fn open(
    State(state): State<AppState>,
    Json(input): Json<OpenCaseRequest>,
) -> AppResult<impl IntoResponse> {
    let canonical = plate::normalize(&input.plate);
    if canonical.is_empty() {
        return Err(AppError::BadRequest(
            "Plate must contain at least one alphanumeric character".into(),
        ));
    }

    let (case, created) = CaseRepo::get_or_create(&state.pool, &canonical).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: case })))
}

/// GET /api/v1/cases/{id}
///
/// The case detail aggregate: case, points, and photos per phase.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bundle = CaseRepo::fetch_bundle(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InspectionCase",
            id,
        }))?;
    Ok(Json(DataResponse { data: bundle }))
}

/// GET /api/v1/cases/{id}/points
pub async fn list_points(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_case(&state, id).await?;
    let points = PointRepo::list_by_case(&state.pool, id).await?;
    Ok(Json(DataResponse { data: points }))
}

/// POST /api/v1/cases/{id}/salida
///
/// Accepts the urlencoded inspection form: answers arrive as
/// `salida__{point_key}` fields, the inspector name as `salida_by`.
/// Updates each matched point, then stamps the case. The point updates and
/// the case stamp are independent statements; a failure partway through
/// leaves earlier updates in place.
pub async fn save_salida(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    require_case(&state, id).await?;

    let by = named_field(&fields, "salida_by");
    let answers = forms::extract_answers(Phase::Salida, &fields);

    let mut saved = 0;
    let mut dropped = 0;
    for (point_key, value) in &answers {
        if PointRepo::set_salida_value(&state.pool, id, point_key, value).await? {
            saved += 1;
        } else {
            dropped += 1;
            tracing::warn!(case_id = id, %point_key, "Salida answer matched no point");
        }
    }

    CaseRepo::stamp_salida(&state.pool, id, by.as_deref()).await?;

    let case = require_case(&state, id).await?;
    Ok(Json(DataResponse {
        data: SaveResult {
            case,
            answers_saved: saved,
            answers_dropped: dropped,
        },
    }))
}

/// POST /api/v1/cases/{id}/entrada?auto_close=true
///
/// Symmetric to the salida save for `entrada__{point_key}` / `entrada_by`
/// fields. With `auto_close` (the default) the case is closed afterwards in
/// a separate update.
pub async fn save_entrada(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<SaveEntradaParams>,
    Form(fields): Form<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    require_case(&state, id).await?;

    let by = named_field(&fields, "entrada_by");
    let answers = forms::extract_answers(Phase::Entrada, &fields);

    let mut saved = 0;
    let mut dropped = 0;
    for (point_key, value) in &answers {
        if PointRepo::set_entrada_value(&state.pool, id, point_key, value).await? {
            saved += 1;
        } else {
            dropped += 1;
            tracing::warn!(case_id = id, %point_key, "Entrada answer matched no point");
        }
    }

    CaseRepo::stamp_entrada(&state.pool, id, by.as_deref()).await?;

    if params.auto_close {
        CaseRepo::close(&state.pool, id).await?;
    }

    let case = require_case(&state, id).await?;
    Ok(Json(DataResponse {
        data: SaveResult {
            case,
            answers_saved: saved,
            answers_dropped: dropped,
        },
    }))
}

/// POST /api/v1/cases/{id}/close
///
/// Unconditionally transition the case to closed.
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let closed = CaseRepo::close(&state.pool, id).await?;
    if !closed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "InspectionCase",
            id,
        }));
    }
    let case = require_case(&state, id).await?;
    Ok(Json(DataResponse { data: case }))
}

/// Fetch a case or fail with 404.
async fn require_case(state: &AppState, id: DbId) -> Result<InspectionCase, AppError> {
    CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InspectionCase",
            id,
        }))
}

/// Look up a non-answer form field by name, treating blank as absent.
fn named_field(fields: &[(String, String)], name: &str) -> Option<String> {
    fields
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
