//! Request handlers, one module per resource.

pub mod cases;
pub mod catalog;
pub mod forms;
pub mod photos;
pub mod plates;
