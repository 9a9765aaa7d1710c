//! Typed success payloads for the public API.
//!
//! Wire shapes are part of the external contract and use camelCase field
//! names; use these instead of ad-hoc `serde_json::json!` so the shapes
//! are compile-time checked.

use serde::Serialize;

use medifab_core::search::{SearchOutcome, SearchQuery, SearchResult};
use medifab_core::types::DbId;

/// `POST /api/quote` success body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub success: bool,
    pub lead_id: DbId,
    pub floor_plan_uploaded: bool,
}

/// `POST /api/survey` and `POST /api/contact` success body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    pub lead_id: DbId,
}

/// Per-collection result arrays for `GET /api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub products: Vec<SearchResult>,
    pub events: Vec<SearchResult>,
    pub posts: Vec<SearchResult>,
    pub resources: Vec<SearchResult>,
}

/// `GET /api/search` success body. Echoes the validated query back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: &'static str,
    pub results: SearchResults,
    pub total_results: usize,
    pub limit: i64,
    pub page: i64,
}

impl SearchResponse {
    pub fn new(query: &SearchQuery, outcome: SearchOutcome) -> Self {
        SearchResponse {
            query: query.term.clone(),
            search_type: query.scope.as_str(),
            results: SearchResults {
                products: outcome.products,
                events: outcome.events,
                posts: outcome.posts,
                resources: outcome.resources,
            },
            total_results: outcome.total_results,
            limit: query.limit,
            page: query.page,
        }
    }
}
