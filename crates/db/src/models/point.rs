//! Per-case checklist point entity model.

use serde::Serialize;
use sqlx::FromRow;
use tablilla_core::forms::PointView;
use tablilla_core::types::DbId;

/// A row from the `inspection_points` table.
///
/// One answer record per catalog entry per case, copied from the catalog
/// when the case is seeded. `(case_id, point_key)` is unique. The two value
/// columns are filled independently during their phases and stay `NULL`
/// until answered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Point {
    pub id: DbId,
    pub case_id: DbId,
    pub point_key: String,
    pub point_label: String,
    pub salida_value: Option<String>,
    pub entrada_value: Option<String>,
}

impl From<&Point> for PointView {
    fn from(p: &Point) -> Self {
        PointView {
            point_key: p.point_key.clone(),
            point_label: p.point_label.clone(),
            salida_value: p.salida_value.clone(),
            entrada_value: p.entrada_value.clone(),
        }
    }
}
