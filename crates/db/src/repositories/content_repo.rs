//! Search queries over the published content collections.
//!
//! Each collection gets one query: a published-status filter ANDed with a
//! case-insensitive substring match (`ILIKE`) across that collection's
//! searchable fields, windowed by `LIMIT`/`OFFSET`. No ordering is imposed
//! here; callers must not rely on row order.

use sqlx::PgPool;

use medifab_core::store::PageWindow;

use crate::models::content::{EventRow, PostRow, ProductRow, ResourceRow};

const PRODUCT_COLUMNS: &str = "id, title, slug, description, category, image_url";
const EVENT_COLUMNS: &str = "id, title, slug, description, location, venue, start_date, image_url";
const POST_COLUMNS: &str = "id, title, slug, description, image_url";
const RESOURCE_COLUMNS: &str = "id, title, slug, description, category, image_url";

/// Read-only search access to products, events, posts, and resources.
pub struct ContentRepo;

impl ContentRepo {
    /// Products match on title, description, or category.
    pub async fn search_products(
        pool: &PgPool,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE status = 'published'
               AND (title ILIKE $1 OR description ILIKE $1 OR category ILIKE $1)
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(contains_pattern(term))
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await
    }

    /// Events match on title, location, or venue.
    pub async fn search_events(
        pool: &PgPool,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<EventRow>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE status = 'published'
               AND (title ILIKE $1 OR location ILIKE $1 OR venue ILIKE $1)
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, EventRow>(&query)
            .bind(contains_pattern(term))
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await
    }

    /// Posts match on title or description.
    pub async fn search_posts(
        pool: &PgPool,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<PostRow>, sqlx::Error> {
        let query = format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE status = 'published'
               AND (title ILIKE $1 OR description ILIKE $1)
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PostRow>(&query)
            .bind(contains_pattern(term))
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await
    }

    /// Resources match on title or description.
    pub async fn search_resources(
        pool: &PgPool,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ResourceRow>, sqlx::Error> {
        let query = format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources
             WHERE status = 'published'
               AND (title ILIKE $1 OR description ILIKE $1)
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ResourceRow>(&query)
            .bind(contains_pattern(term))
            .bind(window.limit)
            .bind(window.offset())
            .fetch_all(pool)
            .await
    }
}

/// Build the `%term%` pattern, escaping LIKE metacharacters in the user
/// term so `%`, `_`, and `\` match literally.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
