use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::parser::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Content generation is not configured")]
    GenerationUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Extraction(err.to_string())
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::Extraction(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                msg.clone(),
            ),
            AppError::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                format!(
                    "Unsupported document type '{content_type}'. Use application/pdf, text/plain or text/markdown"
                ),
            ),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "The content generation service failed".to_string(),
                )
            }
            AppError::GenerationUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "GENERATION_UNAVAILABLE",
                "Content generation is not configured on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
