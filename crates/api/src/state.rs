use std::sync::Arc;

use tablilla_core::storage::PhotoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tablilla_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Disk-backed photo object store.
    pub photos: Arc<PhotoStore>,
}
