use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use residencia_export::render::render_score_text;
use residencia_scales::scoring::{ResponseSet, ScaleDefinition, ScoreResult};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScaleSummary {
    id: String,
    name: String,
    item_count: usize,
    max_possible_score: u32,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    responses: ResponseSet,
}

pub async fn list_scales(State(state): State<AppState>) -> Json<Vec<ScaleSummary>> {
    let scales = state
        .catalog
        .iter()
        .map(|s| ScaleSummary {
            id: s.id.clone(),
            name: s.name.clone(),
            item_count: s.items.len(),
            max_possible_score: s.max_possible_score(),
        })
        .collect();
    Json(scales)
}

pub async fn get_scale_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScaleDefinition>, ApiError> {
    let scale = state.catalog.get(&id)?;
    Ok(Json(scale.clone()))
}

pub async fn score_scale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(request) = payload?;
    let result = state.catalog.score(&id, &request.responses)?;
    Ok(Json(result))
}

/// Score and return the plain-text block used in clinical notes.
pub async fn score_scale_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(request) = payload?;
    let result = state.catalog.score(&id, &request.responses)?;
    Ok(render_score_text(&result)?)
}
