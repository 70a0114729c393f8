use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure in the analysis pipeline is terminal for its request: there
/// is no retry and no partial result, only the mapping below.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Resume text is too short to analyze ({got} characters, need at least {min})")]
    InsufficientContent { got: usize, min: usize },

    #[error("Resume analysis is not configured on this server")]
    ServiceUnconfigured,

    #[error("Scoring service unavailable: {0}")]
    ScoringUnavailable(String),

    #[error("Scoring service returned an empty response")]
    ScoringEmptyResponse,

    #[error("Scoring service returned a malformed response: {0}")]
    ScoringMalformedResponse(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingInput(_)
            | AppError::UnsupportedFormat(_)
            | AppError::InsufficientContent { .. }
            | AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ExtractionFailed(msg) => {
                tracing::error!("Extraction error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::ServiceUnconfigured => {
                tracing::error!("Analyze request received but no scoring credential is set");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::ScoringUnavailable(msg) => {
                tracing::error!("Scoring error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::ScoringEmptyResponse | AppError::ScoringMalformedResponse(_) => {
                tracing::error!("Scoring error: {self}");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
