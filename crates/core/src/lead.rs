//! Lead entity model and creation DTO.
//!
//! A `Lead` is one persisted inbound inquiry from a marketing form. Its
//! per-form extra fields live in [`LeadMetadata`], a union tagged by the
//! originating form, so the variant fields are statically known while the
//! core contact fields stay uniform across sources.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Which marketing form produced a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Quote,
    Survey,
    Contact,
}

impl LeadSource {
    /// Stable string form used in the `leads.source` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Quote => "quote",
            LeadSource::Survey => "survey",
            LeadSource::Contact => "contact",
        }
    }
}

/// Lead lifecycle status. Intake always writes [`LeadStatus::New`];
/// the remaining variants are mutated only by admin tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

/// Source-specific extra fields, tagged by the originating form.
///
/// Deriving [`LeadSource`] from the variant (rather than storing it as a
/// separate field) makes a mismatched source/metadata pair unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum LeadMetadata {
    Quote {
        #[serde(skip_serializing_if = "Option::is_none")]
        project_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        floor_plan_media_id: Option<DbId>,
        submitted_at: Timestamp,
    },
    Survey {
        location: String,
        preferred_date: NaiveDate,
        #[serde(skip_serializing_if = "Option::is_none")]
        preferred_time: Option<String>,
        submitted_at: Timestamp,
    },
    Contact {
        submitted_at: Timestamp,
    },
}

impl LeadMetadata {
    /// The source implied by this metadata variant.
    pub fn source(&self) -> LeadSource {
        match self {
            LeadMetadata::Quote { .. } => LeadSource::Quote,
            LeadMetadata::Survey { .. } => LeadSource::Survey,
            LeadMetadata::Contact { .. } => LeadSource::Contact,
        }
    }
}

/// A persisted lead. Immutable after creation except `status`, which is
/// owned by admin tooling outside this core.
#[derive(Debug, Clone, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Optional contact detail; stored as empty string when absent.
    pub phone: String,
    pub company: String,
    /// Free-text body, mapped from `description` / `projectDetails` /
    /// `message` depending on the source form.
    pub message: String,
    pub status: LeadStatus,
    pub metadata: LeadMetadata,
    pub created_at: Timestamp,
}

impl Lead {
    pub fn source(&self) -> LeadSource {
        self.metadata.source()
    }
}

/// DTO for creating a lead. Status is not part of the DTO: the store
/// forces it to `new` on insert.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub metadata: LeadMetadata,
}
