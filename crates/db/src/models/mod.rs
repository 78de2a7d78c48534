//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the request DTOs the API layer deserializes.

pub mod case;
pub mod catalog;
pub mod photo;
pub mod point;
