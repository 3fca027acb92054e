use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use residencia_core::models::assessment::{validate_patient_id, Assessment, NewAssessment};
use residencia_storage::assessments;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    validate_patient_id(&patient_id)?;
    let assessments = assessments::list_assessments(state.store.as_ref(), &patient_id).await?;
    Ok(Json(assessments))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path((patient_id, id)): Path<(String, Uuid)>,
) -> Result<Json<Assessment>, ApiError> {
    validate_patient_id(&patient_id)?;
    let assessment = assessments::load_assessment(state.store.as_ref(), &patient_id, id).await?;
    Ok(Json(assessment))
}

pub async fn create_assessment(
    State(state): State<AppState>,
    Path(patient_id): Path<String>,
    payload: Result<Json<NewAssessment>, JsonRejection>,
) -> Result<(StatusCode, Json<Assessment>), ApiError> {
    let Json(request) = payload?;
    let assessment = Assessment::record_with(&state.catalog, &patient_id, request)?;
    assessments::save_assessment(state.store.as_ref(), &assessment).await?;
    Ok((StatusCode::CREATED, Json(assessment)))
}
