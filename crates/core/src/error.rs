use crate::intake::IntakeError;
use crate::store::StoreError;
use crate::validation::FieldError;

/// Domain-level error shared across the workspace crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more submitted fields failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// An uploaded file has a disallowed MIME type or exceeds the size cap.
    /// Same response bucket as validation (400-class).
    #[error("Unsupported media")]
    UnsupportedMedia(Vec<FieldError>),

    /// A content-store read or write failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// An internal invariant was broken.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Persistence(err.to_string())
    }
}

impl From<IntakeError> for CoreError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::UnsupportedMedia(errors) => CoreError::UnsupportedMedia(errors),
            IntakeError::Store(store) => store.into(),
        }
    }
}

impl CoreError {
    /// The per-field problems carried by validation-class errors, if any.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            CoreError::Validation(errors) | CoreError::UnsupportedMedia(errors) => Some(errors),
            _ => None,
        }
    }
}
