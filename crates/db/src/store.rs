//! Postgres implementation of the core [`ContentStore`] trait.

use async_trait::async_trait;

use medifab_core::lead::{Lead, NewLead};
use medifab_core::store::{
    ContentStore, EventHit, PageWindow, PostHit, ProductHit, ResourceHit, StoreError,
};
use medifab_core::types::DbId;
use medifab_core::upload::FileUpload;

use crate::repositories::{ContentRepo, LeadRepo, MediaRepo};
use crate::DbPool;

/// Content store backed by the Postgres pool.
#[derive(Clone)]
pub struct PgContentStore {
    pool: DbPool,
}

impl PgContentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log the backend error in full, hand back the sanitized store error.
fn store_err(context: &'static str, err: impl std::fmt::Display) -> StoreError {
    tracing::error!(error = %err, context, "Content store operation failed");
    StoreError(format!("{context}: {err}"))
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError> {
        let metadata = serde_json::to_value(&input.metadata)
            .map_err(|e| store_err("encode lead metadata", e))?;
        let row = LeadRepo::create(&self.pool, &input, &metadata)
            .await
            .map_err(|e| store_err("create lead", e))?;
        row.into_domain().map_err(|e| store_err("decode lead", e))
    }

    async fn create_media(&self, upload: &FileUpload) -> Result<DbId, StoreError> {
        let row = MediaRepo::create(&self.pool, upload)
            .await
            .map_err(|e| store_err("create media", e))?;
        Ok(row.id)
    }

    async fn search_products(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ProductHit>, StoreError> {
        let rows = ContentRepo::search_products(&self.pool, term, window)
            .await
            .map_err(|e| store_err("search products", e))?;
        Ok(rows.into_iter().map(ProductHit::from).collect())
    }

    async fn search_events(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<EventHit>, StoreError> {
        let rows = ContentRepo::search_events(&self.pool, term, window)
            .await
            .map_err(|e| store_err("search events", e))?;
        Ok(rows.into_iter().map(EventHit::from).collect())
    }

    async fn search_posts(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<PostHit>, StoreError> {
        let rows = ContentRepo::search_posts(&self.pool, term, window)
            .await
            .map_err(|e| store_err("search posts", e))?;
        Ok(rows.into_iter().map(PostHit::from).collect())
    }

    async fn search_resources(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ResourceHit>, StoreError> {
        let rows = ContentRepo::search_resources(&self.pool, term, window)
            .await
            .map_err(|e| store_err("search resources", e))?;
        Ok(rows.into_iter().map(ResourceHit::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| store_err("ping", e))
    }
}
