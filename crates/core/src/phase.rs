//! The two inspection phases of a case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inspection phase: checkout ("salida") or check-in ("entrada").
///
/// Serialized lowercase everywhere: the `inspection_photos.phase` column,
/// URL path segments, and the `{phase}__{point_key}` form-field prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Salida,
    Entrada,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Salida => "salida",
            Phase::Entrada => "entrada",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salida" => Ok(Phase::Salida),
            "entrada" => Ok(Phase::Entrada),
            other => Err(CoreError::Validation(format!(
                "Invalid phase '{other}'. Must be 'salida' or 'entrada'"
            ))),
        }
    }
}
