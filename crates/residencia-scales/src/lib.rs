//! residencia-scales
//!
//! Clinical scale catalog and scoring engine. Pure data and pure functions,
//! no I/O. Each scale is an ordered list of items whose point values are
//! summed and then interpreted against a table of severity bands.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod scales;
pub mod scoring;

use catalog::ScaleCatalog;
use error::ScaleError;
use scoring::{ResponseSet, ScaleDefinition, ScoreResult};

/// Look up a built-in scale by id (ASCII case-insensitive, trimmed).
pub fn get_scale(scale_id: &str) -> Result<&'static ScaleDefinition, ScaleError> {
    ScaleCatalog::builtin().get(scale_id)
}

/// Ids of every built-in scale.
pub fn list_scales() -> Vec<&'static str> {
    ScaleCatalog::builtin().ids()
}

/// Score a complete submission for a built-in scale.
pub fn score(scale_id: &str, responses: &ResponseSet) -> Result<ScoreResult, ScaleError> {
    ScaleCatalog::builtin().score(scale_id, responses)
}
