//! API route definitions.

use axum::Router;

pub mod change;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router {
    Router::new().merge(health::routes()).merge(change::routes())
}
