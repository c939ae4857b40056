use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use jcmp_sdk::Comparator;

use crate::config::ServerConfig;
use crate::handler;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Performs the outbound fetches for URL-mode comparisons.
    pub comparator: Comparator,
    /// The server configuration the router was built from.
    pub config: ServerConfig,
}

/// Build the axum router with all jcmp endpoints.
pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route("/v1/compare/urls", post(handler::compare_urls_handler))
        .route("/v1/compare/direct", post(handler::compare_direct_handler))
        .layer(body_limit)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
