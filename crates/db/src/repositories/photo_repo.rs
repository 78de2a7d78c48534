//! Repository for the `inspection_photos` table.

use sqlx::PgPool;
use tablilla_core::types::DbId;

use crate::models::photo::Photo;

/// Column list for the `inspection_photos` table.
const COLUMNS: &str = "id, case_id, phase, url, uploaded_by, created_at";

/// Append-only photo metadata operations.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Record an uploaded photo's metadata.
    pub async fn create(
        pool: &PgPool,
        case_id: DbId,
        phase: &str,
        url: &str,
        uploaded_by: Option<&str>,
    ) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO inspection_photos (case_id, phase, url, uploaded_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(case_id)
            .bind(phase)
            .bind(url)
            .bind(uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// List a case's photos for one phase, newest first.
    pub async fn list_by_case_phase(
        pool: &PgPool,
        case_id: DbId,
        phase: &str,
    ) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_photos \
             WHERE case_id = $1 AND phase = $2 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(case_id)
            .bind(phase)
            .fetch_all(pool)
            .await
    }
}
