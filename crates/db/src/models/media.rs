//! Media row model.

use sqlx::FromRow;

use medifab_core::types::{DbId, Timestamp};

/// A stored upload from the `media` table, without the file bytes.
/// The bytes column is only read by out-of-scope admin tooling.
#[derive(Debug, Clone, FromRow)]
pub struct MediaRow {
    pub id: DbId,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}
