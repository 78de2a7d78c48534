//! Route definitions, one module per resource.

pub mod cases;
pub mod catalog;
pub mod health;
pub mod plates;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/cases", cases::router())
        .nest("/plates", plates::router())
}
