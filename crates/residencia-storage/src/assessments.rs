use uuid::Uuid;

use residencia_core::keys;
use residencia_core::models::assessment::Assessment;

use crate::error::StorageError;
use crate::objects::ObjectStore;

/// Store an assessment as JSON under its patient's prefix.
pub async fn save_assessment(
    store: &dyn ObjectStore,
    assessment: &Assessment,
) -> Result<(), StorageError> {
    let key = keys::assessment(&assessment.patient_id, assessment.id);
    let body = serde_json::to_vec(assessment)?;
    store.put_object(&key, body).await?;
    tracing::info!(
        patient_id = %assessment.patient_id,
        scale = %assessment.scale_id,
        id = %assessment.id,
        "assessment stored"
    );
    Ok(())
}

pub async fn load_assessment(
    store: &dyn ObjectStore,
    patient_id: &str,
    id: Uuid,
) -> Result<Assessment, StorageError> {
    let body = store.get_object(&keys::assessment(patient_id, id)).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Every assessment of a patient, oldest first.
pub async fn list_assessments(
    store: &dyn ObjectStore,
    patient_id: &str,
) -> Result<Vec<Assessment>, StorageError> {
    let prefix = keys::patient_assessments_prefix(patient_id);
    let mut assessments = Vec::new();
    for key in store.list_objects(&prefix).await? {
        let body = store.get_object(&key).await?;
        let assessment: Assessment = serde_json::from_slice(&body)?;
        assessments.push(assessment);
    }
    assessments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(assessments)
}
