//! Route definitions for the checklist catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET / -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(catalog::list))
}
