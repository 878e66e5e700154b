use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// More than one row matched a key that must be unique. Not retryable.
    #[error("Integrity fault: {0}")]
    IntegrityFault(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `Validation` error from a `validator` report.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
