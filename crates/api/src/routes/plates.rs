//! Route definitions for plate-scoped case lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::plates;
use crate::state::AppState;

/// Routes mounted at `/plates`.
///
/// ```text
/// GET /{plate}/latest -> latest case for the plate, any status
/// GET /{plate}/closed -> closed-case history, newest first
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{plate}/latest", get(plates::latest))
        .route("/{plate}/closed", get(plates::closed_history))
}
