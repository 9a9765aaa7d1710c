pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Body cap for the quote form: the 10 MiB floor-plan limit plus headroom
/// for the other fields and multipart framing. Oversized-but-parseable
/// uploads must reach validation so the client gets a structured 400.
const QUOTE_BODY_LIMIT: usize = 12 * 1024 * 1024;

/// Build the `/api` route tree.
///
/// ```text
/// POST /quote     quote request (multipart, optional floor plan)
/// POST /survey    site survey request (JSON)
/// POST /contact   contact form (JSON)
/// GET  /search    multi-collection content search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/quote",
            post(handlers::quote::submit_quote).layer(DefaultBodyLimit::max(QUOTE_BODY_LIMIT)),
        )
        .route("/survey", post(handlers::survey::submit_survey))
        .route("/contact", post(handlers::contact::submit_contact))
        .route("/search", get(handlers::search::search))
}
