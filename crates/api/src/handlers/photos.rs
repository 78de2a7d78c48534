//! Handlers for per-case photo upload and listing.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;
use tablilla_core::error::CoreError;
use tablilla_core::forms;
use tablilla_core::phase::Phase;
use tablilla_core::types::DbId;
use tablilla_db::models::photo::Photo;
use tablilla_db::repositories::{CaseRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// One file that could not be stored or recorded.
#[derive(Debug, Serialize)]
pub struct FailedUpload {
    pub filename: String,
    pub error: String,
}

/// Outcome of a batch upload. Partial success is normal: each file is
/// stored and recorded independently and a failure does not stop the batch.
#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub uploaded: Vec<Photo>,
    pub failed: Vec<FailedUpload>,
}

/// GET /api/v1/cases/{id}/photos/{phase}
///
/// Photo metadata for one case/phase, newest first.
pub async fn list(
    State(state): State<AppState>,
    Path((id, phase)): Path<(DbId, Phase)>,
) -> AppResult<impl IntoResponse> {
    require_case(&state, id).await?;
    let photos = PhotoRepo::list_by_case_phase(&state.pool, id, phase.as_str()).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// GET /api/v1/cases/{id}/photos/{phase}/html
///
/// The same list rendered as a clickable-thumbnail fragment.
pub async fn list_html(
    State(state): State<AppState>,
    Path((id, phase)): Path<(DbId, Phase)>,
) -> AppResult<Html<String>> {
    require_case(&state, id).await?;
    let photos = PhotoRepo::list_by_case_phase(&state.pool, id, phase.as_str()).await?;
    let urls: Vec<String> = photos.into_iter().map(|p| p.url).collect();
    Ok(Html(forms::build_photo_list(&urls)))
}

/// POST /api/v1/cases/{id}/photos/{phase}
///
/// Multipart batch upload. Every field carrying a filename is treated as a
/// photo; an optional `uploaded_by` text field names the uploader. Each
/// file is written to the photo store (create-new keyed by
/// `{case}/{phase}/{timestamp}_{filename}`) and a metadata row is inserted;
/// per-file failures are logged and reported, and the loop continues.
///
/// Returns 201 when at least one file was stored, 200 otherwise.
pub async fn upload(
    State(state): State<AppState>,
    Path((id, phase)): Path<(DbId, Phase)>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    require_case(&state, id).await?;

    let mut files: Vec<(String, Vec<u8>)> = Vec::new();
    let mut uploaded_by: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if let Some(filename) = field.file_name().map(str::to_string) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            files.push((filename, data.to_vec()));
        } else if field.name() == Some("uploaded_by") {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            let text = text.trim().to_string();
            if !text.is_empty() {
                uploaded_by = Some(text);
            }
        }
        // Other text fields are ignored.
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(
            "Missing file fields in multipart body".into(),
        ));
    }

    let mut outcome = UploadOutcome {
        uploaded: Vec::new(),
        failed: Vec::new(),
    };

    for (filename, data) in files {
        match store_one(&state, id, phase, uploaded_by.as_deref(), &filename, &data).await {
            Ok(photo) => outcome.uploaded.push(photo),
            Err(error) => {
                tracing::warn!(case_id = id, %phase, %filename, %error, "Photo upload failed");
                outcome.failed.push(FailedUpload {
                    filename,
                    error: error.to_string(),
                });
            }
        }
    }

    let status = if outcome.uploaded.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(DataResponse { data: outcome })))
}

/// Store one file and record its metadata row.
async fn store_one(
    state: &AppState,
    case_id: DbId,
    phase: Phase,
    uploaded_by: Option<&str>,
    filename: &str,
    data: &[u8],
) -> Result<Photo, AppError> {
    let stored = state
        .photos
        .save(case_id, phase, chrono::Utc::now(), filename, data)
        .await?;
    let photo = PhotoRepo::create(
        &state.pool,
        case_id,
        phase.as_str(),
        &stored.url,
        uploaded_by,
    )
    .await?;
    Ok(photo)
}

/// Fetch the case or fail with 404.
async fn require_case(state: &AppState, id: DbId) -> Result<(), AppError> {
    CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InspectionCase",
            id,
        }))?;
    Ok(())
}
