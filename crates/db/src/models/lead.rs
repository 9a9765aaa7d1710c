//! Lead row model and conversion to the domain type.

use sqlx::FromRow;

use medifab_core::lead::{Lead, LeadMetadata, LeadStatus};
use medifab_core::types::{DbId, Timestamp};

/// A lead row from the `leads` table. `source` and `status` are stored as
/// text, `metadata` as jsonb.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub source: String,
    pub status: String,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}

impl LeadRow {
    /// Convert into the domain [`Lead`], decoding status and metadata.
    /// Fails only on rows written outside this codebase's invariants.
    pub fn into_domain(self) -> Result<Lead, serde_json::Error> {
        let status: LeadStatus = serde_json::from_value(serde_json::Value::String(self.status))?;
        let metadata: LeadMetadata = serde_json::from_value(self.metadata)?;
        Ok(Lead {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            message: self.message,
            status,
            metadata,
            created_at: self.created_at,
        })
    }
}
