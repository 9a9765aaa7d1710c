//! Fan-out search across the content collections.

use std::sync::Arc;

use crate::store::{ContentStore, StoreError};

use super::{Collection, SearchQuery, SearchResult};

/// Per-collection result sets for one search request.
///
/// `total_results` is the sum of the four page-window sizes actually
/// returned, not a grand total across all pages.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub products: Vec<SearchResult>,
    pub events: Vec<SearchResult>,
    pub posts: Vec<SearchResult>,
    pub resources: Vec<SearchResult>,
    pub total_results: usize,
}

/// Fans one query out to the selected collections, each with its own
/// identical page window, and merges the normalized results.
pub struct SearchAggregator {
    store: Arc<dyn ContentStore>,
}

impl SearchAggregator {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Run the query. Collections outside the scope are skipped entirely
    /// (no store call); the selected ones are queried concurrently.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, StoreError> {
        let (products, events, posts, resources) = tokio::try_join!(
            self.collect(Collection::Products, query),
            self.collect(Collection::Events, query),
            self.collect(Collection::Posts, query),
            self.collect(Collection::Resources, query),
        )?;

        let total_results = products.len() + events.len() + posts.len() + resources.len();

        tracing::debug!(
            term = %query.term,
            scope = query.scope.as_str(),
            total_results,
            "Search executed"
        );

        Ok(SearchOutcome {
            products,
            events,
            posts,
            resources,
            total_results,
        })
    }

    async fn collect(
        &self,
        collection: Collection,
        query: &SearchQuery,
    ) -> Result<Vec<SearchResult>, StoreError> {
        if !query.scope.includes(collection) {
            return Ok(Vec::new());
        }

        let window = query.window();
        let results = match collection {
            Collection::Products => self
                .store
                .search_products(&query.term, window)
                .await?
                .into_iter()
                .map(SearchResult::from)
                .collect(),
            Collection::Events => self
                .store
                .search_events(&query.term, window)
                .await?
                .into_iter()
                .map(SearchResult::from)
                .collect(),
            Collection::Posts => self
                .store
                .search_posts(&query.term, window)
                .await?
                .into_iter()
                .map(SearchResult::from)
                .collect(),
            Collection::Resources => self
                .store
                .search_resources(&query.term, window)
                .await?
                .into_iter()
                .map(SearchResult::from)
                .collect(),
        };
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{Lead, NewLead};
    use crate::search::{SearchParams, SearchScope};
    use crate::store::{EventHit, PageWindow, PostHit, ProductHit, ResourceHit};
    use crate::types::DbId;
    use crate::upload::FileUpload;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub store with canned hits per collection; records the window each
    /// search method received.
    #[derive(Default)]
    struct StubStore {
        products: Vec<ProductHit>,
        events: Vec<EventHit>,
        posts: Vec<PostHit>,
        resources: Vec<ResourceHit>,
        windows: Mutex<Vec<(&'static str, PageWindow)>>,
    }

    impl StubStore {
        fn record(&self, collection: &'static str, window: PageWindow) {
            self.windows.lock().unwrap().push((collection, window));
        }
    }

    #[async_trait]
    impl ContentStore for StubStore {
        async fn create_lead(&self, _input: NewLead) -> Result<Lead, StoreError> {
            Err(StoreError("not a lead store".into()))
        }

        async fn create_media(&self, _upload: &FileUpload) -> Result<DbId, StoreError> {
            Err(StoreError("not a media store".into()))
        }

        async fn search_products(
            &self,
            _term: &str,
            window: PageWindow,
        ) -> Result<Vec<ProductHit>, StoreError> {
            self.record("products", window);
            Ok(self.products.clone())
        }

        async fn search_events(
            &self,
            _term: &str,
            window: PageWindow,
        ) -> Result<Vec<EventHit>, StoreError> {
            self.record("events", window);
            Ok(self.events.clone())
        }

        async fn search_posts(
            &self,
            _term: &str,
            window: PageWindow,
        ) -> Result<Vec<PostHit>, StoreError> {
            self.record("posts", window);
            Ok(self.posts.clone())
        }

        async fn search_resources(
            &self,
            _term: &str,
            window: PageWindow,
        ) -> Result<Vec<ResourceHit>, StoreError> {
            self.record("resources", window);
            Ok(self.resources.clone())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn product(id: DbId, title: &str) -> ProductHit {
        ProductHit {
            id,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            description: None,
            image: None,
            category: None,
        }
    }

    fn query(term: &str, scope: SearchScope, limit: i64, page: i64) -> SearchQuery {
        let raw = SearchParams {
            q: Some(term.to_string()),
            search_type: Some(scope.as_str().to_string()),
            limit: Some(limit.to_string()),
            page: Some(page.to_string()),
            ..Default::default()
        };
        SearchQuery::from_params(&raw).unwrap()
    }

    #[tokio::test]
    async fn all_scope_queries_every_collection_with_the_same_window() {
        let store = Arc::new(StubStore::default());
        let aggregator = SearchAggregator::new(store.clone());

        aggregator
            .search(&query("modular", SearchScope::All, 5, 2))
            .await
            .unwrap();

        let mut windows = store.windows.lock().unwrap().clone();
        windows.sort_by_key(|(name, _)| *name);
        let expected = PageWindow { limit: 5, page: 2 };
        assert_eq!(
            windows,
            vec![
                ("events", expected),
                ("posts", expected),
                ("products", expected),
                ("resources", expected),
            ]
        );
    }

    #[tokio::test]
    async fn narrow_scope_skips_the_other_collections() {
        let store = Arc::new(StubStore {
            products: vec![product(1, "Modular Operation Theatre")],
            ..Default::default()
        });
        let aggregator = SearchAggregator::new(store.clone());

        let outcome = aggregator
            .search(&query("modular", SearchScope::Products, 10, 1))
            .await
            .unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.total_results, 1);

        let windows = store.windows.lock().unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].0, "products");
    }

    #[tokio::test]
    async fn total_results_is_the_sum_of_returned_page_sizes() {
        let store = Arc::new(StubStore {
            products: vec![product(1, "Modular OT"), product(2, "Gas Pendant")],
            posts: vec![PostHit {
                id: 3,
                title: "Modular thinking".into(),
                slug: "modular-thinking".into(),
                description: None,
                image: None,
            }],
            ..Default::default()
        });
        let aggregator = SearchAggregator::new(store);

        let outcome = aggregator
            .search(&query("modular", SearchScope::All, 20, 1))
            .await
            .unwrap();
        assert_eq!(outcome.total_results, 3);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        #[derive(Default)]
        struct FailingStore;

        #[async_trait]
        impl ContentStore for FailingStore {
            async fn create_lead(&self, _input: NewLead) -> Result<Lead, StoreError> {
                Err(StoreError("nope".into()))
            }
            async fn create_media(&self, _u: &FileUpload) -> Result<DbId, StoreError> {
                Err(StoreError("nope".into()))
            }
            async fn search_products(
                &self,
                _t: &str,
                _w: PageWindow,
            ) -> Result<Vec<ProductHit>, StoreError> {
                Err(StoreError("connection reset".into()))
            }
            async fn search_events(
                &self,
                _t: &str,
                _w: PageWindow,
            ) -> Result<Vec<EventHit>, StoreError> {
                Ok(Vec::new())
            }
            async fn search_posts(
                &self,
                _t: &str,
                _w: PageWindow,
            ) -> Result<Vec<PostHit>, StoreError> {
                Ok(Vec::new())
            }
            async fn search_resources(
                &self,
                _t: &str,
                _w: PageWindow,
            ) -> Result<Vec<ResourceHit>, StoreError> {
                Ok(Vec::new())
            }
            async fn ping(&self) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let aggregator = SearchAggregator::new(Arc::new(FailingStore));
        let err = aggregator
            .search(&query("modular", SearchScope::All, 20, 1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
