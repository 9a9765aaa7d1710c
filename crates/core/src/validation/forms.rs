//! Per-form submission types and validators.
//!
//! Raw submissions carry everything as optional strings (multipart and JSON
//! bodies alike may omit fields); validators produce the typed form or the
//! complete list of field errors.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use super::{is_valid_email, is_valid_phone, FieldError};

// Minimum lengths enforced per form.
const MIN_NAME_LEN: usize = 2;
const MIN_DESCRIPTION_LEN: usize = 10;
const MIN_MESSAGE_LEN: usize = 10;
const MIN_PROJECT_DETAILS_LEN: usize = 20;
const MIN_LOCATION_LEN: usize = 5;

// ---------------------------------------------------------------------------
// Quote request
// ---------------------------------------------------------------------------

/// Raw quote-request fields as collected from the multipart body.
#[derive(Debug, Clone, Default)]
pub struct QuoteSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
}

/// A validated quote request.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: Option<String>,
    pub description: String,
}

/// Validate a quote submission, accumulating all field errors.
pub fn validate_quote(raw: &QuoteSubmission) -> Result<QuoteForm, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_min_len(&raw.name, "name", MIN_NAME_LEN, "Name", &mut errors);
    let email = required_email(&raw.email, &mut errors);
    let description = required_min_len(
        &raw.description,
        "description",
        MIN_DESCRIPTION_LEN,
        "Description",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(QuoteForm {
        name,
        email,
        phone: optional_trimmed(&raw.phone),
        company: optional_trimmed(&raw.organization),
        project_type: raw
            .project_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        description,
    })
}

// ---------------------------------------------------------------------------
// Survey request
// ---------------------------------------------------------------------------

/// Raw site-survey request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub location: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub project_details: Option<String>,
}

/// A validated site-survey request.
#[derive(Debug, Clone)]
pub struct SurveyForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub location: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: Option<String>,
    pub project_details: String,
}

/// Validate a survey submission, accumulating all field errors.
///
/// `preferredDate` accepts `YYYY-MM-DD` or an RFC 3339 datetime; anything
/// else fails with exactly `Invalid date format`. Past dates are only
/// rejected client-side and pass here.
pub fn validate_survey(raw: &SurveySubmission) -> Result<SurveyForm, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_min_len(&raw.name, "name", MIN_NAME_LEN, "Name", &mut errors);
    let email = required_email(&raw.email, &mut errors);
    let location = required_min_len(
        &raw.location,
        "location",
        MIN_LOCATION_LEN,
        "Location",
        &mut errors,
    );
    let project_details = required_min_len(
        &raw.project_details,
        "projectDetails",
        MIN_PROJECT_DETAILS_LEN,
        "Project details",
        &mut errors,
    );

    let preferred_date = match raw.preferred_date.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push(FieldError::new("preferredDate", "Preferred date is required"));
            None
        }
        Some(value) => match parse_date(value) {
            Some(date) => Some(date),
            None => {
                errors.push(FieldError::new("preferredDate", "Invalid date format"));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SurveyForm {
        name,
        email,
        phone: optional_trimmed(&raw.phone),
        company: optional_trimmed(&raw.organization),
        location,
        // Guarded by the errors check above.
        preferred_date: preferred_date.unwrap(),
        preferred_time: raw
            .preferred_time
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        project_details,
    })
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

/// Raw contact-form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A validated contact-form message.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Validate a contact submission. Unlike quote/survey, a present phone
/// number must match the digits-and-punctuation pattern.
pub fn validate_contact(raw: &ContactSubmission) -> Result<ContactForm, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_min_len(&raw.name, "name", MIN_NAME_LEN, "Name", &mut errors);
    let email = required_email(&raw.email, &mut errors);
    let message = required_min_len(
        &raw.message,
        "message",
        MIN_MESSAGE_LEN,
        "Message",
        &mut errors,
    );

    let phone = optional_trimmed(&raw.phone);
    if !phone.is_empty() && !is_valid_phone(&phone) {
        errors.push(FieldError::new("phone", "Invalid phone number"));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactForm {
        name,
        email,
        phone,
        message,
    })
}

// ---------------------------------------------------------------------------
// Shared field checks
// ---------------------------------------------------------------------------

/// Require a trimmed value of at least `min` characters; pushes a
/// `"{label} must be at least {min} characters"` error otherwise.
fn required_min_len(
    value: &Option<String>,
    field: &str,
    min: usize,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if trimmed.chars().count() < min {
        errors.push(FieldError::new(
            field,
            format!("{label} must be at least {min} characters"),
        ));
    }
    trimmed.to_string()
}

fn required_email(value: &Option<String>, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if !is_valid_email(trimmed) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    trimmed.to_string()
}

fn optional_trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

/// Parse `YYYY-MM-DD`, falling back to the date part of an RFC 3339
/// datetime.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_survey() -> SurveySubmission {
        SurveySubmission {
            name: Some("Ravi Deshmukh".into()),
            email: Some("ravi@hospitalgroup.in".into()),
            phone: Some("+91 98220 11223".into()),
            organization: Some("Sahyadri Hospitals".into()),
            location: Some("Pune, Maharashtra".into()),
            preferred_date: Some("2026-09-15".into()),
            preferred_time: Some("morning".into()),
            project_details: Some("Two modular operation theatres for the new surgical wing".into()),
        }
    }

    #[test]
    fn quote_collects_every_field_error_at_once() {
        let raw = QuoteSubmission {
            name: Some("A".into()),
            email: Some("nope".into()),
            description: Some("too short".into()),
            ..Default::default()
        };
        let errors = validate_quote(&raw).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "description"]);
    }

    #[test]
    fn quote_description_boundary_is_ten_characters() {
        let mut raw = QuoteSubmission {
            name: Some("Dr Mehta".into()),
            email: Some("mehta@clinic.in".into()),
            ..Default::default()
        };
        raw.description = Some("123456789".into());
        assert!(validate_quote(&raw).is_err());
        raw.description = Some("1234567890".into());
        assert!(validate_quote(&raw).is_ok());
    }

    #[test]
    fn quote_maps_organization_to_company_and_defaults_empty() {
        let raw = QuoteSubmission {
            name: Some("Dr Mehta".into()),
            email: Some("mehta@clinic.in".into()),
            description: Some("Need an ICU buildout quote".into()),
            ..Default::default()
        };
        let form = validate_quote(&raw).unwrap();
        assert_eq!(form.phone, "");
        assert_eq!(form.company, "");
        assert!(form.project_type.is_none());
    }

    #[test]
    fn survey_project_details_boundary_is_twenty_characters() {
        let mut raw = valid_survey();

        raw.project_details = Some("a".repeat(19));
        let errors = validate_survey(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "projectDetails");
        assert!(errors[0].message.contains("at least 20 characters"));

        raw.project_details = Some("a".repeat(20));
        assert!(validate_survey(&raw).is_ok());
    }

    #[test]
    fn survey_rejects_unparsable_date_with_exact_message() {
        let mut raw = valid_survey();
        raw.preferred_date = Some("next tuesday".into());
        let errors = validate_survey(&raw).unwrap_err();
        assert_eq!(errors[0].field, "preferredDate");
        assert_eq!(errors[0].message, "Invalid date format");
    }

    #[test]
    fn survey_accepts_rfc3339_datetimes() {
        let mut raw = valid_survey();
        raw.preferred_date = Some("2026-09-15T09:30:00+05:30".into());
        let form = validate_survey(&raw).unwrap();
        assert_eq!(
            form.preferred_date,
            NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
        );
    }

    #[test]
    fn survey_past_dates_are_not_rejected_server_side() {
        let mut raw = valid_survey();
        raw.preferred_date = Some("2001-01-01".into());
        assert!(validate_survey(&raw).is_ok());
    }

    #[test]
    fn survey_location_boundary_is_five_characters() {
        let mut raw = valid_survey();
        raw.location = Some("Pune".into());
        let errors = validate_survey(&raw).unwrap_err();
        assert_eq!(errors[0].field, "location");
    }

    #[test]
    fn contact_validates_phone_format_when_present() {
        let raw = ContactSubmission {
            name: Some("Anita Rao".into()),
            email: Some("anita@example.com".into()),
            phone: Some("not a phone".into()),
            message: Some("Please send your product catalogue".into()),
        };
        let errors = validate_contact(&raw).unwrap_err();
        assert_eq!(errors[0].field, "phone");

        let raw = ContactSubmission {
            phone: None,
            ..raw
        };
        assert!(validate_contact(&raw).is_ok());
    }

    #[test]
    fn missing_fields_report_under_wire_names() {
        let errors = validate_survey(&SurveySubmission::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"projectDetails"));
        assert!(fields.contains(&"preferredDate"));
        assert!(fields.contains(&"location"));
    }
}
