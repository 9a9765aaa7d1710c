//! Content-store seam.
//!
//! The marketing site's collections (products, events, posts, resources,
//! leads, media) live in an external store. The core depends on it only
//! through [`ContentStore`], so the intake pipeline and search aggregator
//! can be exercised against an in-memory stub while production wires in
//! the Postgres implementation from `medifab-db`.

use async_trait::async_trait;

use crate::lead::{Lead, NewLead};
use crate::types::{DbId, Timestamp};
use crate::upload::FileUpload;

/// A content-store failure. Backends map their native errors into this;
/// the message is for server logs, never for clients in production.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Per-collection pagination window. Each searched collection gets its own
/// window; there is no global limit over the merged result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    /// 1-based page number.
    pub page: i64,
}

impl PageWindow {
    /// Row offset for this window. Saturates instead of overflowing;
    /// validation bounds `page` below but not above, so an absurd page
    /// must degrade to an empty page, not a panic or a negative offset.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// A product row projected for search.
#[derive(Debug, Clone)]
pub struct ProductHit {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// An event row projected for search.
#[derive(Debug, Clone)]
pub struct EventHit {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<Timestamp>,
}

/// A blog-post row projected for search.
#[derive(Debug, Clone)]
pub struct PostHit {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// A resource row projected for search.
#[derive(Debug, Clone)]
pub struct ResourceHit {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// Black-box capability over the external content store.
///
/// Search methods return only published items matching the term as a
/// case-insensitive substring of that collection's searchable fields
/// (products: title/description/category; events: title/location/venue;
/// posts and resources: title/description), windowed by `window`. Result
/// order is whatever the backend returns.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a lead with status forced to `new`; returns the stored row.
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError>;

    /// Persist an uploaded file in the media collection; returns its id.
    async fn create_media(&self, upload: &FileUpload) -> Result<DbId, StoreError>;

    async fn search_products(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ProductHit>, StoreError>;

    async fn search_events(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<EventHit>, StoreError>;

    async fn search_posts(&self, term: &str, window: PageWindow)
        -> Result<Vec<PostHit>, StoreError>;

    async fn search_resources(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ResourceHit>, StoreError>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
