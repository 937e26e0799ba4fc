use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines endpoints that are unauthenticated and accessible to any client.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Static welcome message at the API root.
        .route("/", get(handlers::welcome))
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load
        // balancer checks. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
}
