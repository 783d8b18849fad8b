use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;

/// Build the axum router with all jcmp endpoints.
pub fn build_router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(handler::index_handler))
        .route("/health", get(handler::health_handler))
        .route("/compare", post(handler::compare_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}
