//! Photo metadata entity model.

use serde::Serialize;
use sqlx::FromRow;
use tablilla_core::types::{DbId, Timestamp};

/// A row from the `inspection_photos` table.
///
/// Append-only: rows are never updated or deleted by this service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub case_id: DbId,
    /// `"salida"` or `"entrada"`.
    pub phase: String,
    /// Public URL of the stored object.
    pub url: String,
    pub uploaded_by: Option<String>,
    pub created_at: Timestamp,
}
