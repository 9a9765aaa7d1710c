//! Handler for multi-collection content search.

use axum::extract::{Query, State};
use axum::Json;

use medifab_core::search::{SearchAggregator, SearchParams, SearchQuery};

use crate::error::{AppError, AppResult};
use crate::response::SearchResponse;
use crate::state::AppState;

/// GET /api/search
///
/// Query params: `q` (or `query`), `type` (default `all`), `limit`
/// (1-50, default 20), `page` (default 1). Fans out to the selected
/// collections, each with its own page window, and returns the merged,
/// normalized results.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let query = SearchQuery::from_params(&params).map_err(AppError::from)?;

    let aggregator = SearchAggregator::new(state.store.clone());
    let outcome = aggregator.search(&query).await?;

    Ok(Json(SearchResponse::new(&query, outcome)))
}
