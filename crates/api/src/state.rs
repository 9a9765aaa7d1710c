use std::sync::Arc;

use medifab_core::intake::LeadIntake;
use medifab_core::store::ContentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The content store and intake pipeline are held behind trait objects so
/// integration tests can inject in-memory stubs; production wires in
/// `PgContentStore` and the SMTP dispatcher (see `main.rs`).
#[derive(Clone)]
pub struct AppState {
    /// Content-store capability (collections, leads, media).
    pub store: Arc<dyn ContentStore>,
    /// Lead intake pipeline with its dispatcher injected.
    pub intake: Arc<LeadIntake>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
