//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Response types
//!
//! The handlers hold no state; every request is an independent pure
//! calculation in `cashtill-core`.

pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the main application router.
pub fn create_router() -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
