//! Lead intake pipeline.
//!
//! Normalizes a validated form submission (plus an optional floor-plan
//! attachment) into a [`Lead`], persists it through the injected
//! [`ContentStore`], and detaches a best-effort notification pair (admin
//! alert + submitter confirmation). Steps run strictly in order:
//! attachment validation, media write, lead write, detached notify.

use std::sync::Arc;

use chrono::Utc;

use crate::lead::{Lead, LeadMetadata, NewLead};
use crate::notify::{NotificationDispatcher, NotificationKind};
use crate::store::{ContentStore, StoreError};
use crate::types::DbId;
use crate::upload::{validate_upload, FileUpload};
use crate::validation::{ContactForm, FieldError, QuoteForm, SurveyForm};

/// A validated submission from one of the three lead-capture forms.
#[derive(Debug, Clone)]
pub enum LeadForm {
    Quote(QuoteForm),
    Survey(SurveyForm),
    Contact(ContactForm),
}

/// Result of a successful submission.
#[derive(Debug, Clone, Copy)]
pub struct IntakeOutcome {
    pub lead_id: DbId,
    pub floor_plan_uploaded: bool,
}

/// Pipeline failure. Media rejection is 400-class; store failures are
/// 500-class.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Unsupported file upload")]
    UnsupportedMedia(Vec<FieldError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Lead intake pipeline with its collaborators injected at construction.
pub struct LeadIntake {
    store: Arc<dyn ContentStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    admin_email: String,
}

impl LeadIntake {
    pub fn new(
        store: Arc<dyn ContentStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            admin_email: admin_email.into(),
        }
    }

    /// Submit a validated form, with an optional attachment (quote only).
    ///
    /// The attachment is validated and written before the lead so a lead is
    /// never created while its offered attachment failed; a media-store
    /// failure therefore aborts the whole submission. Resubmitting an
    /// identical payload creates a second, distinct lead; there is no
    /// deduplication key.
    pub async fn submit(
        &self,
        form: LeadForm,
        attachment: Option<FileUpload>,
    ) -> Result<IntakeOutcome, IntakeError> {
        if let Some(file) = &attachment {
            validate_upload(file).map_err(IntakeError::UnsupportedMedia)?;
        }

        let media_id = match &attachment {
            Some(file) => {
                let id = self.store.create_media(file).await?;
                tracing::debug!(media_id = id, file = %file.file_name, "Floor plan stored");
                Some(id)
            }
            None => None,
        };

        let input = build_lead(form, media_id);
        let lead = self.store.create_lead(input).await?;
        let lead_id = lead.id;
        tracing::info!(
            lead_id,
            source = lead.source().as_str(),
            "Lead created"
        );

        // Detached: the HTTP response must never wait on the mail provider.
        // The task takes ownership of the lead.
        let dispatcher = Arc::clone(&self.dispatcher);
        let admin_email = self.admin_email.clone();
        tokio::spawn(async move {
            notify_new_lead(dispatcher.as_ref(), &admin_email, &lead).await;
        });

        Ok(IntakeOutcome {
            lead_id,
            floor_plan_uploaded: media_id.is_some(),
        })
    }
}

/// Send the admin alert and submitter confirmation for a new lead.
/// Each failure is logged and swallowed independently.
pub async fn notify_new_lead(
    dispatcher: &dyn NotificationDispatcher,
    admin_email: &str,
    lead: &Lead,
) {
    if let Err(err) = dispatcher
        .dispatch(NotificationKind::AdminAlert, admin_email, lead)
        .await
    {
        tracing::warn!(lead_id = lead.id, error = %err, "Admin alert email failed");
    }

    if let Err(err) = dispatcher
        .dispatch(NotificationKind::Confirmation, &lead.email, lead)
        .await
    {
        tracing::warn!(lead_id = lead.id, error = %err, "Confirmation email failed");
    }
}

/// Map a validated form (and the stored media id, when present) into the
/// canonical lead shape. `message` comes from the form's free-text field.
fn build_lead(form: LeadForm, media_id: Option<DbId>) -> NewLead {
    let submitted_at = Utc::now();
    match form {
        LeadForm::Quote(quote) => NewLead {
            name: quote.name,
            email: quote.email,
            phone: quote.phone,
            company: quote.company,
            message: quote.description,
            metadata: LeadMetadata::Quote {
                project_type: quote.project_type,
                floor_plan_media_id: media_id,
                submitted_at,
            },
        },
        LeadForm::Survey(survey) => NewLead {
            name: survey.name,
            email: survey.email,
            phone: survey.phone,
            company: survey.company,
            message: survey.project_details,
            metadata: LeadMetadata::Survey {
                location: survey.location,
                preferred_date: survey.preferred_date,
                preferred_time: survey.preferred_time,
                submitted_at,
            },
        },
        LeadForm::Contact(contact) => NewLead {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: String::new(),
            message: contact.message,
            metadata: LeadMetadata::Contact { submitted_at },
        },
    }
}
