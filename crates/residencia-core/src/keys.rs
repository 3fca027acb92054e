//! Object key conventions.
//!
//! Pure string functions. Every assessment lives under its patient so a
//! patient's history is a single prefix listing.

use uuid::Uuid;

pub fn patient_assessments_prefix(patient_id: &str) -> String {
    format!("patients/{patient_id}/assessments/")
}

pub fn assessment(patient_id: &str, id: Uuid) -> String {
    format!("patients/{patient_id}/assessments/{id}.json")
}
