//! residencia-export
//!
//! Plain-text rendering of scale results for pasting into clinical notes.

pub mod error;
pub mod render;
