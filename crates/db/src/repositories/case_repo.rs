//! Repository for the `inspection_case` table.

use sqlx::PgPool;
use tablilla_core::plate;
use tablilla_core::types::DbId;

use crate::models::case::{CaseBundle, InspectionCase, STATUS_CLOSED, STATUS_OPEN};
use crate::repositories::{PhotoRepo, PointRepo};

/// Column list for the `inspection_case` table.
const COLUMNS: &str = "id, plate, status, salida_at, salida_by, entrada_at, entrada_by, created_at";

/// Provides case lifecycle operations. Plate arguments are normalized
/// internally, so callers may pass raw user input.
pub struct CaseRepo;

impl CaseRepo {
    /// Find the open case for a plate, or create one.
    ///
    /// A newly created case starts open with `salida_at` stamped. In both
    /// branches the case's checklist points are (re)seeded from the
    /// catalog; a seeding failure is logged and does not fail the call.
    ///
    /// Returns the case and whether it was created by this call. A
    /// concurrent create for the same plate loses to the
    /// `uq_inspection_case_open_plate` index and surfaces as a conflict.
    pub async fn get_or_create(
        pool: &PgPool,
        raw_plate: &str,
    ) -> Result<(InspectionCase, bool), sqlx::Error> {
        let plate = plate::normalize(raw_plate);

        if let Some(existing) = Self::find_open_by_plate(pool, &plate).await? {
            Self::seed_points_non_fatal(pool, existing.id).await;
            return Ok((existing, false));
        }

        let insert_query = format!(
            "INSERT INTO inspection_case (plate, status, salida_at) \
             VALUES ($1, $2, now()) \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, InspectionCase>(&insert_query)
            .bind(&plate)
            .bind(STATUS_OPEN)
            .fetch_one(pool)
            .await?;

        Self::seed_points_non_fatal(pool, created.id).await;
        Ok((created, true))
    }

    /// Find the open case for a plate, if any.
    pub async fn find_open_by_plate(
        pool: &PgPool,
        raw_plate: &str,
    ) -> Result<Option<InspectionCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_case \
             WHERE plate = $1 AND status = $2"
        );
        sqlx::query_as::<_, InspectionCase>(&query)
            .bind(plate::normalize(raw_plate))
            .bind(STATUS_OPEN)
            .fetch_optional(pool)
            .await
    }

    /// Find the most recently created case for a plate, any status.
    pub async fn find_latest_by_plate(
        pool: &PgPool,
        raw_plate: &str,
    ) -> Result<Option<InspectionCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_case \
             WHERE plate = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, InspectionCase>(&query)
            .bind(plate::normalize(raw_plate))
            .fetch_optional(pool)
            .await
    }

    /// List all closed cases for a plate, newest first (history view).
    pub async fn list_closed_by_plate(
        pool: &PgPool,
        raw_plate: &str,
    ) -> Result<Vec<InspectionCase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_case \
             WHERE plate = $1 AND status = $2 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, InspectionCase>(&query)
            .bind(plate::normalize(raw_plate))
            .bind(STATUS_CLOSED)
            .fetch_all(pool)
            .await
    }

    /// Find a case by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InspectionCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inspection_case WHERE id = $1");
        sqlx::query_as::<_, InspectionCase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the case detail aggregate: the case, its points, and its
    /// photos per phase (newest first). The four reads are issued
    /// concurrently; they have no ordering dependency.
    ///
    /// Returns `None` when the case does not exist; the list parts are
    /// empty rather than missing.
    pub async fn fetch_bundle(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CaseBundle>, sqlx::Error> {
        let (case, points, fotos_salida, fotos_entrada) = tokio::try_join!(
            Self::find_by_id(pool, id),
            PointRepo::list_by_case(pool, id),
            PhotoRepo::list_by_case_phase(pool, id, "salida"),
            PhotoRepo::list_by_case_phase(pool, id, "entrada"),
        )?;

        Ok(case.map(|case| CaseBundle {
            case,
            points,
            fotos_salida,
            fotos_entrada,
        }))
    }

    /// Stamp the case's salida timestamp and inspector name.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn stamp_salida(
        pool: &PgPool,
        id: DbId,
        by: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inspection_case SET salida_at = now(), salida_by = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp the case's entrada timestamp and inspector name.
    pub async fn stamp_entrada(
        pool: &PgPool,
        id: DbId,
        by: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE inspection_case SET entrada_at = now(), entrada_by = $2 WHERE id = $1",
        )
        .bind(id)
        .bind(by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Transition a case to closed, unconditionally. There is no
    /// transition back to open.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn close(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE inspection_case SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(STATUS_CLOSED)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Seed points for a case, downgrading any failure to a warning. Case
    /// retrieval must not fail because the checklist could not be copied.
    async fn seed_points_non_fatal(pool: &PgPool, case_id: DbId) {
        if let Err(error) = PointRepo::ensure_seeded(pool, case_id).await {
            tracing::warn!(case_id, %error, "Failed to seed checklist points");
        }
    }
}
