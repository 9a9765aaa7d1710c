//! Row models for the searchable content collections, with conversions
//! into the core hit types the aggregator consumes.

use sqlx::FromRow;

use medifab_core::store::{EventHit, PostHit, ProductHit, ResourceHit};
use medifab_core::types::{DbId, Timestamp};

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl From<ProductRow> for ProductHit {
    fn from(row: ProductRow) -> Self {
        ProductHit {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image: row.image_url,
            category: row.category,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<Timestamp>,
    pub image_url: Option<String>,
}

impl From<EventRow> for EventHit {
    fn from(row: EventRow) -> Self {
        EventHit {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image: row.image_url,
            location: row.location,
            venue: row.venue,
            start_date: row.start_date,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<PostRow> for PostHit {
    fn from(row: PostRow) -> Self {
        PostHit {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image: row.image_url,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ResourceRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl From<ResourceRow> for ResourceHit {
    fn from(row: ResourceRow) -> Self {
        ResourceHit {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            image: row.image_url,
            category: row.category,
        }
    }
}
