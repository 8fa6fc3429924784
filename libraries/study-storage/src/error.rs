/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input rejected before it reached a table
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<study_core::StudyError> for StorageError {
    fn from(err: study_core::StudyError) -> Self {
        match err {
            study_core::StudyError::NotFound { entity, id } => Self::NotFound { entity, id },
            study_core::StudyError::InvalidInput(msg) => Self::Validation(msg),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<StorageError> for study_core::StudyError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => study_core::StudyError::not_found(entity, id),
            StorageError::Validation(msg) => study_core::StudyError::invalid_input(msg),
        }
    }
}
