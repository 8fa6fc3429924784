/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use study_core::StudyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request body failed to parse or validate
    #[error("{message}: {details}")]
    Invalid { message: String, details: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StudyError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// 400 with a fixed message and parser/validator details
    pub fn invalid(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl From<study_storage::StorageError> for ServerError {
    fn from(err: study_storage::StorageError) -> Self {
        ServerError::Storage(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ServerError::Invalid { message, details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "details": details }),
            ),
            ServerError::Storage(StudyError::InvalidInput(msg)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid input", "details": msg }),
            ),
            ServerError::Storage(StudyError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{} not found", entity) }),
            ),
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Storage error" }),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Configuration error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
