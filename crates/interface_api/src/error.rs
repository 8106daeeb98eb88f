//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reason required: {0}")]
    ReasonRequired(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON body of every error response: `{"error": "not_found", "message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone()),
            ApiError::ReasonRequired(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "reason_required", msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone()),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::Validation { message, .. } => ApiError::Validation(message),
            ClaimError::Document { .. } => ApiError::Validation(err.to_string()),
            ClaimError::ReasonRequired { .. } => ApiError::ReasonRequired(err.to_string()),
            ClaimError::NotFound(id) => ApiError::NotFound(format!("Claim {id} not found")),
            other => {
                error!(error = %other, "Claim operation failed");
                ApiError::Internal(other.to_string())
            }
        }
    }
}
