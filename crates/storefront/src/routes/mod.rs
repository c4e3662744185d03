//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Page load (fresh page state)
//! GET  /health            - Health check
//! GET  /static/*          - Stylesheet and images
//!
//! # Page events (each renders the full page)
//! POST /theme/toggle      - Theme toggle clicked
//! GET  /search?q=         - Search input changed
//! POST /order/{index}     - Order control on card {index}
//! POST /overlay/dismiss   - Click on the open overlay (target=close|background|content)
//! ```

pub mod page;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{create_session_layer, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Static assets directory, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Create the page event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page::show))
        .route("/theme/toggle", post(page::toggle_theme))
        .route("/search", get(page::search))
        .route("/order/{index}", post(page::order))
        .route("/overlay/dismiss", post(page::dismiss))
}

/// Build the full application: routes, static files and middleware.
///
/// Sentry layers are added by the binary on top of this router.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
