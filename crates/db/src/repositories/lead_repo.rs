//! Repository for the `leads` table.

use sqlx::PgPool;

use medifab_core::lead::NewLead;

use crate::models::lead::LeadRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, company, message, source, status, metadata, created_at";

/// Provides create/read operations for leads. Leads are never updated or
/// deleted from this codebase; status changes belong to admin tooling.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, forcing `status = 'new'`, returning the row.
    /// The `source` column is derived from the metadata variant.
    pub async fn create(
        pool: &PgPool,
        input: &NewLead,
        metadata: &serde_json::Value,
    ) -> Result<LeadRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, company, message, source, status, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, 'new', $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeadRow>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.message)
            .bind(input.metadata.source().as_str())
            .bind(metadata)
            .fetch_one(pool)
            .await
    }
}
