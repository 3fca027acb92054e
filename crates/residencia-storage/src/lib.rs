//! residencia-storage
//!
//! Persistence port for patient assessments, plus an in-memory adapter.

pub mod assessments;
pub mod error;
pub mod objects;
