use thiserror::Error;

use residencia_scales::error::ScaleError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("scale is not on the approved list: {0}")]
    ScaleNotApproved(String),

    #[error("invalid patient id: {0:?}")]
    InvalidPatientId(String),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}
