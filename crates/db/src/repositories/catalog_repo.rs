//! Repository for the `inspection_catalog` table.

use sqlx::PgPool;

use crate::models::catalog::CatalogEntry;

/// Column list for the `inspection_catalog` table.
const COLUMNS: &str = "id, point_key, point_label, grp, position, created_at";

/// Read access to the global checklist template. The application never
/// writes this table.
pub struct CatalogRepo;

impl CatalogRepo {
    /// List all catalog entries in seeding order: group ascending with
    /// ungrouped entries first, then position.
    pub async fn list(pool: &PgPool) -> Result<Vec<CatalogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_catalog \
             ORDER BY grp ASC NULLS FIRST, position ASC"
        );
        sqlx::query_as::<_, CatalogEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Number of catalog entries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM inspection_catalog")
            .fetch_one(pool)
            .await
    }
}
