use thiserror::Error;

use crate::scoring::ResponseValue;

/// Errors returned to callers of the catalog and the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    NotFound(String),

    #[error(
        "incomplete submission for scale '{scale_id}': missing {}",
        .missing.join(", ")
    )]
    IncompleteSubmission {
        scale_id: String,
        missing: Vec<String>,
    },

    #[error("unknown item '{item_id}' for scale '{scale_id}'")]
    UnknownItem { scale_id: String, item_id: String },

    #[error("invalid response '{value}' for item '{item_id}' of scale '{scale_id}'")]
    InvalidResponse {
        scale_id: String,
        item_id: String,
        value: ResponseValue,
    },

    #[error("score {score} of scale '{scale_id}' matches no interpretation band")]
    InterpretationGap { scale_id: String, score: u32 },
}

/// Authoring defects found while loading scale definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("scale definition has an empty id")]
    EmptyScaleId,

    #[error("scale '{0}' is registered more than once")]
    DuplicateScale(String),

    #[error("scale '{0}' has no items")]
    NoItems(String),

    #[error("scale '{scale_id}' defines item '{item_id}' more than once")]
    DuplicateItem { scale_id: String, item_id: String },

    #[error("item '{item_id}' of scale '{scale_id}' has no scoreable value")]
    NoScoreableValue { scale_id: String, item_id: String },

    #[error("item '{item_id}' of scale '{scale_id}' lists value '{value}' more than once")]
    DuplicateOption {
        scale_id: String,
        item_id: String,
        value: ResponseValue,
    },

    #[error("maximum score of scale '{0}' does not fit in a u32")]
    ScoreOverflow(String),

    #[error("scale '{0}' has no interpretation bands")]
    NoBands(String),

    #[error("band '{label}' of scale '{scale_id}' ends before it starts")]
    InvertedBand { scale_id: String, label: String },

    #[error("scale '{scale_id}' leaves scores {from}..={to} without a band")]
    BandGap { scale_id: String, from: u32, to: u32 },

    #[error("band '{label}' of scale '{scale_id}' overlaps the previous band at score {score}")]
    BandOverlap {
        scale_id: String,
        label: String,
        score: u32,
    },

    #[error("open-ended band '{label}' of scale '{scale_id}' is not the last band")]
    OpenBandNotLast { scale_id: String, label: String },

    #[error("bands of scale '{scale_id}' stop at {covered_to}, below the maximum score {max_possible}")]
    UncoveredMaximum {
        scale_id: String,
        covered_to: u32,
        max_possible: u32,
    },
}
