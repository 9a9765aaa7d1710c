#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use medifab_api::config::ServerConfig;
use medifab_api::router::build_app_router;
use medifab_api::state::AppState;
use medifab_core::intake::LeadIntake;
use medifab_core::lead::{Lead, LeadStatus, NewLead};
use medifab_core::notify::{NotificationDispatcher, NotificationKind, NotifyError};
use medifab_core::store::{
    ContentStore, EventHit, PageWindow, PostHit, ProductHit, ResourceHit, StoreError,
};
use medifab_core::types::DbId;
use medifab_core::upload::FileUpload;

pub const ADMIN_EMAIL: &str = "sales@medifab.test";

// ---------------------------------------------------------------------------
// Stub content store
// ---------------------------------------------------------------------------

/// In-memory content store. Content items are seeded with an explicit
/// status and searched the way the real store contract specifies: only
/// published rows, term as a case-insensitive substring of the
/// collection's searchable fields, windowed per collection. Every search
/// call records the window it received.
#[derive(Default)]
pub struct StubStore {
    pub products: Vec<(String, ProductHit)>,
    pub events: Vec<(String, EventHit)>,
    pub posts: Vec<(String, PostHit)>,
    pub resources: Vec<(String, ResourceHit)>,
    pub leads: Mutex<Vec<Lead>>,
    pub media: Mutex<Vec<(String, usize)>>,
    pub windows: Mutex<Vec<(&'static str, PageWindow)>>,
    pub fail_media: bool,
    pub fail_leads: bool,
}

impl StubStore {
    pub fn lead_count(&self) -> usize {
        self.leads.lock().unwrap().len()
    }

    fn page<T: Clone>(items: Vec<T>, window: PageWindow) -> Vec<T> {
        items
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit as usize)
            .collect()
    }
}

fn matches(term: &str, fields: &[Option<&str>]) -> bool {
    let needle = term.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[async_trait]
impl ContentStore for StubStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError> {
        if self.fail_leads {
            return Err(StoreError("leads table unavailable".into()));
        }
        let mut leads = self.leads.lock().unwrap();
        let lead = Lead {
            id: leads.len() as DbId + 1,
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            message: input.message,
            status: LeadStatus::New,
            metadata: input.metadata,
            created_at: Utc::now(),
        };
        leads.push(lead.clone());
        Ok(lead)
    }

    async fn create_media(&self, upload: &FileUpload) -> Result<DbId, StoreError> {
        if self.fail_media {
            return Err(StoreError("media volume unavailable".into()));
        }
        let mut media = self.media.lock().unwrap();
        media.push((upload.file_name.clone(), upload.size()));
        Ok(media.len() as DbId)
    }

    async fn search_products(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ProductHit>, StoreError> {
        self.windows.lock().unwrap().push(("products", window));
        let hits = self
            .products
            .iter()
            .filter(|(status, hit)| {
                status == "published"
                    && matches(
                        term,
                        &[
                            Some(&hit.title),
                            hit.description.as_deref(),
                            hit.category.as_deref(),
                        ],
                    )
            })
            .map(|(_, hit)| hit.clone())
            .collect();
        Ok(Self::page(hits, window))
    }

    async fn search_events(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<EventHit>, StoreError> {
        self.windows.lock().unwrap().push(("events", window));
        let hits = self
            .events
            .iter()
            .filter(|(status, hit)| {
                status == "published"
                    && matches(
                        term,
                        &[
                            Some(&hit.title),
                            hit.location.as_deref(),
                            hit.venue.as_deref(),
                        ],
                    )
            })
            .map(|(_, hit)| hit.clone())
            .collect();
        Ok(Self::page(hits, window))
    }

    async fn search_posts(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<PostHit>, StoreError> {
        self.windows.lock().unwrap().push(("posts", window));
        let hits = self
            .posts
            .iter()
            .filter(|(status, hit)| {
                status == "published"
                    && matches(term, &[Some(&hit.title), hit.description.as_deref()])
            })
            .map(|(_, hit)| hit.clone())
            .collect();
        Ok(Self::page(hits, window))
    }

    async fn search_resources(
        &self,
        term: &str,
        window: PageWindow,
    ) -> Result<Vec<ResourceHit>, StoreError> {
        self.windows.lock().unwrap().push(("resources", window));
        let hits = self
            .resources
            .iter()
            .filter(|(status, hit)| {
                status == "published"
                    && matches(term, &[Some(&hit.title), hit.description.as_deref()])
            })
            .map(|(_, hit)| hit.clone())
            .collect();
        Ok(Self::page(hits, window))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stub dispatcher
// ---------------------------------------------------------------------------

/// Records every dispatch; optionally fails each one.
#[derive(Default)]
pub struct StubDispatcher {
    pub sent: Mutex<Vec<(NotificationKind, String)>>,
    pub fail: bool,
}

#[async_trait]
impl NotificationDispatcher for StubDispatcher {
    async fn dispatch(
        &self,
        kind: NotificationKind,
        recipient: &str,
        _lead: &Lead,
    ) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((kind, recipient.to_string()));
        if self.fail {
            Err(NotifyError("simulated smtp outage".into()))
        } else {
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults. `expose_errors` is off
/// so 500 bodies carry the generic production message.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_email: ADMIN_EMAIL.to_string(),
        expose_errors: false,
    }
}

/// Build the full app router over the given stub store and dispatcher,
/// mirroring the wiring in `main.rs` so tests exercise the same
/// middleware stack production uses.
pub fn build_test_app(
    store: Arc<StubStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
) -> Router {
    let config = test_config();
    let store: Arc<dyn ContentStore> = store;
    let intake = Arc::new(LeadIntake::new(
        Arc::clone(&store),
        dispatcher,
        ADMIN_EMAIL,
    ));
    let state = AppState {
        store,
        intake,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// App over an empty store and a succeeding dispatcher.
pub fn test_app() -> (Router, Arc<StubStore>) {
    let store = Arc::new(StubStore::default());
    let app = build_test_app(Arc::clone(&store), Arc::new(StubDispatcher::default()));
    (app, store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Assemble a multipart/form-data body from text fields and an optional
/// file part (field name, file name, content type, bytes).
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 400 response whose `errors` array names the given field.
pub async fn assert_validation_error(response: Response<Body>, field: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(
        fields.contains(&field),
        "expected field error for {field}, got {fields:?}"
    );
}
