//! Multi-collection search.
//!
//! Query-parameter validation ([`SearchQuery`]), the normalized
//! [`SearchResult`] projection, and the [`SearchAggregator`] that fans a
//! single query out across the content collections.

mod aggregator;
mod result;

pub use aggregator::{SearchAggregator, SearchOutcome};
pub use result::{truncate_plain, SearchExtra, SearchResult, PRODUCT_EXCERPT_CHARS};

use serde::Deserialize;

use crate::store::PageWindow;
use crate::validation::FieldError;

/// Default number of results per collection page.
pub const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Maximum number of results per collection page.
pub const MAX_SEARCH_LIMIT: i64 = 50;

/// The searched collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Products,
    Events,
    Posts,
    Resources,
}

/// Which collections a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Products,
    Events,
    Posts,
    Resources,
}

impl SearchScope {
    pub fn includes(&self, collection: Collection) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Products => collection == Collection::Products,
            SearchScope::Events => collection == Collection::Events,
            SearchScope::Posts => collection == Collection::Posts,
            SearchScope::Resources => collection == Collection::Resources,
        }
    }

    /// Wire form of the scope, echoed back in the response.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Products => "products",
            SearchScope::Events => "events",
            SearchScope::Posts => "posts",
            SearchScope::Resources => "resources",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(SearchScope::All),
            "products" => Some(SearchScope::Products),
            "events" => Some(SearchScope::Events),
            "posts" => Some(SearchScope::Posts),
            "resources" => Some(SearchScope::Resources),
            _ => None,
        }
    }
}

/// Raw query-string parameters. Numbers arrive as strings so that a
/// malformed value yields a structured field error instead of an opaque
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Accepted alias for `q`; `q` wins when both are present.
    pub query: Option<String>,
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub scope: SearchScope,
    pub limit: i64,
    pub page: i64,
}

impl SearchQuery {
    /// Validate raw parameters, accumulating all field errors.
    ///
    /// `limit` outside `[1, 50]` and `page` below 1 are rejected, not
    /// clamped; absent values default to 20 and 1.
    pub fn from_params(params: &SearchParams) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let term = params
            .q
            .as_deref()
            .or(params.query.as_deref())
            .unwrap_or("")
            .trim()
            .to_string();
        if term.is_empty() {
            errors.push(FieldError::new("q", "Search query is required"));
        }

        let scope = match params.search_type.as_deref().map(str::trim) {
            None | Some("") => SearchScope::All,
            Some(value) => match SearchScope::parse(value) {
                Some(scope) => scope,
                None => {
                    errors.push(FieldError::new(
                        "type",
                        "Type must be one of all, products, events, posts, resources",
                    ));
                    SearchScope::All
                }
            },
        };

        let limit = parse_bounded(
            &params.limit,
            "limit",
            DEFAULT_SEARCH_LIMIT,
            1,
            MAX_SEARCH_LIMIT,
            &mut errors,
        );
        let page = parse_bounded(&params.page, "page", 1, 1, i64::MAX, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SearchQuery {
            term,
            scope,
            limit,
            page,
        })
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.limit,
            page: self.page,
        }
    }
}

fn parse_bounded(
    value: &Option<String>,
    field: &str,
    default: i64,
    min: i64,
    max: i64,
    errors: &mut Vec<FieldError>,
) -> i64 {
    let raw = match value.as_deref().map(str::trim) {
        None | Some("") => return default,
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(parsed) if parsed >= min && parsed <= max => parsed,
        Ok(_) | Err(_) => {
            let message = if max == i64::MAX {
                format!("{field} must be a number of at least {min}")
            } else {
                format!("{field} must be a number between {min} and {max}")
            };
            errors.push(FieldError::new(field, message));
            default
        }
    }
}
