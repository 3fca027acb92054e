use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use residencia_core::error::CoreError;
use residencia_export::error::ExportError;
use residencia_scales::error::ScaleError;
use residencia_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Well-formed request the clinician can fix (missing items, unapproved
    /// scale). `missing` names unanswered items, if any.
    Unprocessable { message: String, missing: Vec<String> },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, missing) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Unprocessable { message, missing } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, missing)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, missing })).into_response()
    }
}

impl From<ScaleError> for ApiError {
    fn from(e: ScaleError) -> Self {
        let message = e.to_string();
        match e {
            ScaleError::NotFound(_) => ApiError::NotFound(message),
            ScaleError::IncompleteSubmission { missing, .. } => {
                ApiError::Unprocessable { message, missing }
            }
            ScaleError::UnknownItem { .. } => ApiError::Unprocessable {
                message,
                missing: Vec::new(),
            },
            ScaleError::InvalidResponse { .. } => ApiError::BadRequest(message),
            ScaleError::InterpretationGap { .. } => ApiError::Internal(message),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Scale(e) => e.into(),
            CoreError::ScaleNotApproved(_) => ApiError::Unprocessable {
                message: e.to_string(),
                missing: Vec::new(),
            },
            CoreError::InvalidPatientId(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
