//! Repository for the `media` table.

use sqlx::PgPool;

use medifab_core::upload::FileUpload;

use crate::models::media::MediaRow;

const COLUMNS: &str = "id, file_name, mime_type, size_bytes, created_at";

/// Stores uploaded files. The bytes live in the row; a lead references
/// its upload only by id.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert an upload, returning the stored row (without the bytes).
    pub async fn create(pool: &PgPool, upload: &FileUpload) -> Result<MediaRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (file_name, mime_type, size_bytes, data)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaRow>(&query)
            .bind(&upload.file_name)
            .bind(&upload.mime_type)
            .bind(upload.size() as i64)
            .bind(&upload.data)
            .fetch_one(pool)
            .await
    }
}
