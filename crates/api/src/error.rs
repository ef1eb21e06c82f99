use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use designdeck_core::error::CoreError;
use designdeck_core::prototype::{FIELD_PROJECT_ID, PROJECT_ID_INVALID_MESSAGE};
use designdeck_core::validation::{FieldErrors, INVALID_DATA_MESSAGE};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
///
/// ```json
/// { "message": "...", "code": "NOT_FOUND" }
/// { "message": "...", "code": "VALIDATION_ERROR", "errors": { "title": "..." } }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `designdeck_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg, None)
                }
                CoreError::InvalidFields(fields) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    INVALID_DATA_MESSAGE.to_string(),
                    Some(fields),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(&err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
        };

        let body = match errors {
            Some(errors) => json!({
                "message": message,
                "code": code,
                "errors": errors,
            }),
            None => json!({
                "message": message,
                "code": code,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

type ErrorParts = (StatusCode, &'static str, String, Option<FieldErrors>);

fn internal_error() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
        None,
    )
}

/// Classify a sqlx error into an HTTP status, error code, message, and
/// optional field errors.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key violations (`23503`) on a `fk_*_project` constraint map to
///   a 400 field error on `projectId`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorParts {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("fk_") && constraint.ends_with("_project") {
                    let mut fields = FieldErrors::new();
                    fields.add(FIELD_PROJECT_ID, PROJECT_ID_INVALID_MESSAGE);
                    return (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        INVALID_DATA_MESSAGE.to_string(),
                        Some(fields),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
