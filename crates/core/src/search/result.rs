//! Normalized search-result projection.
//!
//! One underlying content item, regardless of collection, is projected to
//! a [`SearchResult`]: common fields plus a `type`-tagged record of the
//! collection-specific extras.

use serde::Serialize;

use crate::store::{EventHit, PostHit, ProductHit, ResourceHit};
use crate::types::{DbId, Timestamp};

/// Product descriptions are excerpted to this many characters.
pub const PRODUCT_EXCERPT_CHARS: usize = 200;

/// A normalized projection of one content item.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: SearchExtra,
}

/// Collection-specific extra fields, discriminated by `type` on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchExtra {
    Product {
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Event {
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        venue: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_date: Option<Timestamp>,
    },
    Post,
    Resource {
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

impl From<ProductHit> for SearchResult {
    fn from(hit: ProductHit) -> Self {
        SearchResult {
            id: hit.id,
            title: hit.title,
            slug: hit.slug,
            description: hit
                .description
                .as_deref()
                .map(|d| truncate_plain(d, PRODUCT_EXCERPT_CHARS)),
            image: hit.image,
            extra: SearchExtra::Product {
                category: hit.category,
            },
        }
    }
}

impl From<EventHit> for SearchResult {
    fn from(hit: EventHit) -> Self {
        SearchResult {
            id: hit.id,
            title: hit.title,
            slug: hit.slug,
            description: hit.description,
            image: hit.image,
            extra: SearchExtra::Event {
                location: hit.location,
                venue: hit.venue,
                start_date: hit.start_date,
            },
        }
    }
}

impl From<PostHit> for SearchResult {
    fn from(hit: PostHit) -> Self {
        SearchResult {
            id: hit.id,
            title: hit.title,
            slug: hit.slug,
            description: hit.description,
            image: hit.image,
            extra: SearchExtra::Post,
        }
    }
}

impl From<ResourceHit> for SearchResult {
    fn from(hit: ResourceHit) -> Self {
        SearchResult {
            id: hit.id,
            title: hit.title,
            slug: hit.slug,
            description: hit.description,
            image: hit.image,
            extra: SearchExtra::Resource {
                category: hit.category,
            },
        }
    }
}

/// Coerce a (possibly rich-text-derived) description to a plain one-line
/// excerpt: collapse whitespace runs, then cut at `max` characters on a
/// char boundary.
pub fn truncate_plain(text: &str, max: usize) -> String {
    let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(max).collect()
}
