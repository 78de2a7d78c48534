//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod case_repo;
pub mod catalog_repo;
pub mod photo_repo;
pub mod point_repo;

pub use case_repo::CaseRepo;
pub use catalog_repo::CatalogRepo;
pub use photo_repo::PhotoRepo;
pub use point_repo::PointRepo;
