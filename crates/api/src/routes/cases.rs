//! Route definitions for inspection cases and their nested resources.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cases, forms, photos};
use crate::state::AppState;

/// Maximum accepted photo upload body (whole multipart batch).
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Routes mounted at `/cases`.
///
/// ```text
/// POST /                          -> open (get-or-create by plate)
/// GET  /{id}                      -> bundle (case + points + photos)
/// GET  /{id}/points               -> point rows
/// POST /{id}/salida               -> save salida answers + stamp
/// POST /{id}/entrada              -> save entrada answers + stamp (+close)
/// POST /{id}/close                -> explicit close
/// GET  /{id}/photos/{phase}       -> photo metadata, newest first
/// POST /{id}/photos/{phase}       -> multipart batch upload
/// GET  /{id}/photos/{phase}/html  -> thumbnail fragment
/// GET  /{id}/forms/salida         -> salida form fragment
/// GET  /{id}/forms/entrada        -> entrada form fragment
/// GET  /{id}/forms/closed         -> read-only closed table fragment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(cases::open))
        .route("/{id}", get(cases::get_by_id))
        .route("/{id}/points", get(cases::list_points))
        .route("/{id}/salida", post(cases::save_salida))
        .route("/{id}/entrada", post(cases::save_entrada))
        .route("/{id}/close", post(cases::close))
        .route(
            "/{id}/photos/{phase}",
            get(photos::list)
                .post(photos::upload)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/{id}/photos/{phase}/html", get(photos::list_html))
        .route("/{id}/forms/salida", get(forms::salida_form))
        .route("/{id}/forms/entrada", get(forms::entrada_form))
        .route("/{id}/forms/closed", get(forms::closed_table))
}
