//! Repository for the `inspection_points` table.

use sqlx::PgPool;
use tablilla_core::types::DbId;

use crate::models::point::Point;
use crate::repositories::CatalogRepo;

/// Column list for the `inspection_points` table.
const COLUMNS: &str = "id, case_id, point_key, point_label, salida_value, entrada_value";

/// Per-case checklist point operations, including catalog seeding.
pub struct PointRepo;

impl PointRepo {
    /// List all points for a case in insertion (catalog) order.
    pub async fn list_by_case(pool: &PgPool, case_id: DbId) -> Result<Vec<Point>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_points \
             WHERE case_id = $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Point>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// Number of points for a case.
    pub async fn count_by_case(pool: &PgPool, case_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM inspection_points WHERE case_id = $1")
            .bind(case_id)
            .fetch_one(pool)
            .await
    }

    /// Seed the case's points from the catalog if it has none yet.
    ///
    /// Idempotent: a case with any point rows is left untouched, and the
    /// per-row `ON CONFLICT DO NOTHING` keeps a concurrent double-seed
    /// harmless. Points are a copy of the catalog at seeding time; later
    /// catalog edits never reach existing cases.
    ///
    /// Returns the number of points inserted. An empty catalog inserts
    /// nothing and logs a warning (a configuration problem, not an error).
    pub async fn ensure_seeded(pool: &PgPool, case_id: DbId) -> Result<u64, sqlx::Error> {
        if Self::count_by_case(pool, case_id).await? > 0 {
            return Ok(0);
        }

        let catalog = CatalogRepo::list(pool).await?;
        if catalog.is_empty() {
            tracing::warn!(case_id, "Checklist catalog is empty; case seeded with zero points");
            return Ok(0);
        }

        let mut inserted = 0;
        for entry in &catalog {
            let result = sqlx::query(
                "INSERT INTO inspection_points (case_id, point_key, point_label) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT (case_id, point_key) DO NOTHING",
            )
            .bind(case_id)
            .bind(&entry.point_key)
            .bind(&entry.point_label)
            .execute(pool)
            .await?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    /// Set the salida answer for one point, matched by key.
    ///
    /// Returns `false` when the case has no point with that key (the
    /// answer is dropped, mirroring an update that matches no rows).
    pub async fn set_salida_value(
        pool: &PgPool,
        case_id: DbId,
        point_key: &str,
        value: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inspection_points SET salida_value = $3 \
             WHERE case_id = $1 AND point_key = $2",
        )
        .bind(case_id)
        .bind(point_key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the entrada answer for one point, matched by key.
    pub async fn set_entrada_value(
        pool: &PgPool,
        case_id: DbId,
        point_key: &str,
        value: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inspection_points SET entrada_value = $3 \
             WHERE case_id = $1 AND point_key = $2",
        )
        .bind(case_id)
        .bind(point_key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
