//! Checklist catalog entity model.
//!
//! The catalog is the global, ordered template of inspection points. It is
//! read-only from the application's perspective (seeded by migration,
//! managed out of band); cases copy it into `inspection_points` rows at
//! seeding time.

use serde::Serialize;
use sqlx::FromRow;
use tablilla_core::types::{DbId, Timestamp};

/// A row from the `inspection_catalog` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogEntry {
    pub id: DbId,
    pub point_key: String,
    pub point_label: String,
    /// Optional grouping header ("Exterior", "Interior", ...). Entries
    /// without a group sort first.
    pub grp: Option<String>,
    pub position: i32,
    pub created_at: Timestamp,
}
