//! Domain logic for the vehicle inspection checklist service.
//!
//! Everything in this crate is independent of the HTTP layer and (except for
//! [`storage`]) of any I/O: plate canonicalization, the salida/entrada phase
//! model, the form-field naming contract shared with the frontend, and the
//! pure HTML fragment builders.

pub mod error;
pub mod forms;
pub mod phase;
pub mod plate;
pub mod storage;
pub mod types;
