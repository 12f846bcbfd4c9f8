// Error types for social-architect
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchitectError {
    #[error("API Key is missing. Please check your settings or environment configuration.")]
    MissingApiKey,

    #[error("Bad Request: Please check if the file format is supported or text is too long.")]
    BadRequest,

    #[error("API Key Invalid or Quota Exceeded. Please check your settings.")]
    InvalidKeyOrQuota,

    #[error("Failed to generate post. {0}")]
    GenerationFailed(String),

    #[error("Gemini API error: {0}")]
    GeminiApi(String),

    #[error("A generation is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ArchitectError {
    /// Classify a failed primary generation call by its error text.
    ///
    /// Upstream failures surface as free text (`HTTP 403 Forbidden: ...`), so
    /// the category is decided by pattern. `400` wins over `403`.
    pub fn classify_upstream(detail: &str) -> Self {
        if detail.contains("400") {
            ArchitectError::BadRequest
        } else if detail.contains("403")
            || detail.contains("429")
            || detail.contains("RESOURCE_EXHAUSTED")
        {
            ArchitectError::InvalidKeyOrQuota
        } else if detail.is_empty() {
            ArchitectError::GenerationFailed("Please try again.".to_string())
        } else {
            ArchitectError::GenerationFailed(detail.to_string())
        }
    }
}

// Convert ArchitectError to HTTP responses for Axum
impl IntoResponse for ArchitectError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ArchitectError::MissingApiKey | ArchitectError::InvalidKeyOrQuota => {
                (StatusCode::UNAUTHORIZED, "authentication_error", self.to_string())
            }
            ArchitectError::BadRequest | ArchitectError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "invalid_request_error", self.to_string())
            }
            ArchitectError::Busy => (StatusCode::CONFLICT, "busy_error", self.to_string()),
            ArchitectError::Config(_) | ArchitectError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", self.to_string())
            }
            ArchitectError::GenerationFailed(_) | ArchitectError::GeminiApi(_) => {
                (StatusCode::BAD_GATEWAY, "api_error", self.to_string())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error", self.to_string()),
        };

        let body = json!({
            "type": "error",
            "error": {
                "type": error_type,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ArchitectError>;
