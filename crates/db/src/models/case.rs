//! Inspection case entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablilla_core::types::{DbId, Timestamp};

use super::photo::Photo;
use super::point::Point;

/// Case status value for a case still being inspected.
pub const STATUS_OPEN: &str = "open";

/// Case status value after entrada is saved or the case is closed.
pub const STATUS_CLOSED: &str = "closed";

/// A row from the `inspection_case` table.
///
/// One inspection lifecycle for a plate: opened at salida (checkout),
/// closed at entrada (check-in). Immutable once closed in normal flow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InspectionCase {
    pub id: DbId,
    /// Canonical plate (uppercase alphanumeric).
    pub plate: String,
    /// `"open"` or `"closed"`.
    pub status: String,
    pub salida_at: Option<Timestamp>,
    pub salida_by: Option<String>,
    pub entrada_at: Option<Timestamp>,
    pub entrada_by: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for opening (or resolving) a case by plate.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenCaseRequest {
    pub plate: String,
}

/// Aggregate returned for the case detail view: the case, its points, and
/// its photos split by phase (each list newest first).
#[derive(Debug, Clone, Serialize)]
pub struct CaseBundle {
    pub case: InspectionCase,
    pub points: Vec<Point>,
    pub fotos_salida: Vec<Photo>,
    pub fotos_entrada: Vec<Photo>,
}
