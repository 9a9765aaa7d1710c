//! Form validation layer.
//!
//! Pure-logic validators for the inbound marketing forms. Each validator
//! takes the raw submission and returns either the typed form or the full
//! list of field errors; it never stops at the first problem and never
//! panics on user input.

mod forms;

pub use forms::{
    validate_contact, validate_quote, validate_survey, ContactForm, ContactSubmission, QuoteForm,
    QuoteSubmission, SurveyForm, SurveySubmission,
};

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single field-level validation problem, reported under the field's
/// wire name (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard email pattern: one `@`, no whitespace, a dot in the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Phone pattern enforced on the contact form: digits, whitespace,
/// `-`, `+`, and parentheses only.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("phone regex"));

pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub(crate) fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}
