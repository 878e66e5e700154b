use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use draftroom_core::error::CoreError;
use draftroom_core::types::DbId;
use serde_json::json;

/// Application-level error type for the engine and its HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store and board generation
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `draftroom_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// One per-pick upsert of a board generation failed. Earlier upserts of
    /// the same call stay committed.
    #[error("Pick upsert failed for franchise {franchise_id}, season {season}, round {round}: {source}")]
    PickUpsert {
        franchise_id: DbId,
        season: i32,
        round: i32,
        #[source]
        source: Box<AppError>,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Classified form of an error, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorParts {
    pub status: StatusCode,
    /// Outcome name reported to clients (`conflict`, `not_found`, ...).
    pub outcome: &'static str,
    pub code: &'static str,
    pub message: String,
    /// Whether repeating the whole operation may succeed.
    pub retryable: bool,
}

impl ErrorParts {
    fn new(status: StatusCode, outcome: &'static str, code: &'static str, message: String) -> Self {
        Self {
            status,
            outcome,
            code,
            message,
            retryable: false,
        }
    }

    fn internal() -> Self {
        Self {
            retryable: true,
            ..Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

impl AppError {
    /// Classify this error into status, outcome, code and message.
    pub fn parts(&self) -> ErrorParts {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => ErrorParts::new(
                    StatusCode::NOT_FOUND,
                    "not_found",
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => ErrorParts::new(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::Conflict(msg) => {
                    ErrorParts::new(StatusCode::CONFLICT, "conflict", "CONFLICT", msg.clone())
                }
                CoreError::IntegrityFault(msg) => {
                    tracing::error!(error = %msg, "Integrity fault");
                    ErrorParts::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "integrity_fault",
                        "INTEGRITY_FAULT",
                        msg.clone(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    ErrorParts::internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Board generation ---
            AppError::PickUpsert {
                franchise_id,
                season,
                round,
                source,
            } => {
                let inner = source.parts();
                ErrorParts {
                    message: format!(
                        "franchise {franchise_id}, season {season}, round {round}: {}",
                        inner.message
                    ),
                    ..inner
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = self.parts();

        let body = json!({
            "status": parts.outcome,
            "error": parts.message,
            "code": parts.code,
            "retryable": parts.retryable,
        });

        (parts.status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to a retryable 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => ErrorParts::new(
            StatusCode::NOT_FOUND,
            "not_found",
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return ErrorParts::new(
                        StatusCode::CONFLICT,
                        "conflict",
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            ErrorParts::internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            ErrorParts::internal()
        }
    }
}
