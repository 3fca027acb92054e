//! Clinically approved scale names.
//!
//! Assessments may only be recorded against scales on this list. It is
//! maintained by the clinical team and is wider than the set of scales the
//! scoring catalog knows how to compute.

use crate::error::CoreError;

pub const APPROVED_SCALES: &[&str] = &[
    "NIHSS",
    "GLASGOW",
    "MRS",
    "RANKIN",
    "BARTHEL",
    "ASPECTS",
    "CHA2DS2-VASC",
    "HAS-BLED",
    "ABCD2",
    "ICH",
    "HUNT-HESS",
    "FISHER",
    "WFNS",
    "FOUR",
    "UPDRS",
    "HOEHN-YAHR",
    "EDSS",
    "MMSE",
    "MOCA",
    "ALSFRS-R",
    "ASHWORTH",
    "RASS",
];

pub fn is_approved(scale_id: &str) -> bool {
    APPROVED_SCALES
        .iter()
        .any(|approved| approved.eq_ignore_ascii_case(scale_id.trim()))
}

pub fn ensure_approved(scale_id: &str) -> Result<(), CoreError> {
    if is_approved(scale_id) {
        Ok(())
    } else {
        Err(CoreError::ScaleNotApproved(scale_id.to_string()))
    }
}
