use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use residencia_scales::catalog::ScaleCatalog;
use residencia_scales::scoring::{ResponseSet, ScoreResult};

use crate::approved;
use crate::error::CoreError;

/// A scored scale attached to a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub patient_id: String,
    pub scale_id: String,
    pub result: ScoreResult,
    pub notes: Option<String>,
    pub assessed_by: Option<String>,
    pub created_at: jiff::Timestamp,
}

/// Request body for recording an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAssessment {
    pub scale_id: String,
    #[ts(type = "Record<string, number | \"UN\">")]
    pub responses: ResponseSet,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assessed_by: Option<String>,
}

impl Assessment {
    /// Score `request` against the built-in catalog and stamp a new record.
    pub fn record(patient_id: &str, request: NewAssessment) -> Result<Self, CoreError> {
        Self::record_with(ScaleCatalog::builtin(), patient_id, request)
    }

    /// Like [`Assessment::record`], scoring against `catalog`.
    ///
    /// The scale must be on the approved list before it is scored; nothing is
    /// recorded for an incomplete or invalid submission.
    pub fn record_with(
        catalog: &ScaleCatalog,
        patient_id: &str,
        request: NewAssessment,
    ) -> Result<Self, CoreError> {
        validate_patient_id(patient_id)?;
        approved::ensure_approved(&request.scale_id)?;

        let result = catalog.score(&request.scale_id, &request.responses)?;

        Ok(Self {
            id: Uuid::new_v4(),
            patient_id: patient_id.to_string(),
            scale_id: result.scale_id.clone(),
            result,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            assessed_by: request.assessed_by,
            created_at: jiff::Timestamp::now(),
        })
    }
}

/// Patient ids come from the hospital system and become part of object keys,
/// so only ASCII alphanumerics, `-` and `_` are accepted.
pub fn validate_patient_id(patient_id: &str) -> Result<(), CoreError> {
    let valid = !patient_id.is_empty()
        && patient_id.len() <= 64
        && patient_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidPatientId(patient_id.to_string()))
    }
}
