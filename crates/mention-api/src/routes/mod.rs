//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, webhook};
use crate::state::AppState;

/// Create the router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::status).post(webhook::receive_message))
        .merge(health_routes())
}

/// Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
