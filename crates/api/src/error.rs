use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use medifab_core::error::CoreError;
use medifab_core::intake::IntakeError;
use medifab_core::store::StoreError;
use medifab_core::validation::FieldError;

/// Whether 500 responses carry the raw error message. Set once at startup
/// from `ServerConfig::expose_errors` (development vs production).
static EXPOSE_ERRORS: AtomicBool = AtomicBool::new(false);

pub fn set_expose_errors(expose: bool) {
    EXPOSE_ERRORS.store(expose, Ordering::Relaxed);
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{success: false, error, …}`
/// JSON error shape; validation-class errors additionally carry the
/// per-field problem list.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `medifab_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        AppError::Core(err.into())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Core(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, field_errors) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(errors) | CoreError::UnsupportedMedia(errors) => (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(errors.clone()),
                ),
                CoreError::Persistence(msg) => {
                    tracing::error!(error = %msg, "Persistence error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        internal_message(msg),
                        None,
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        internal_message(msg),
                        None,
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    internal_message(msg),
                    None,
                )
            }
        };

        let body = match field_errors {
            Some(errors) => json!({
                "success": false,
                "error": message,
                "errors": errors,
            }),
            None => json!({
                "success": false,
                "error": message,
            }),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Raw message in development, generic one in production.
fn internal_message(raw: &str) -> String {
    if EXPOSE_ERRORS.load(Ordering::Relaxed) {
        raw.to_string()
    } else {
        "An internal error occurred".to_string()
    }
}
