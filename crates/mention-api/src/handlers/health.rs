//! Health check handlers
//!
//! Plain-text status page and a JSON liveness probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// First line of the status page
pub const STATUS_BANNER: &str = "GroupMe @all Bot is running.";

/// Liveness response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Status page with configuration warnings
///
/// GET /
pub async fn status(State(state): State<AppState>) -> String {
    let config = state.config();
    let mut lines = vec![STATUS_BANNER.to_string()];

    let missing = config.platform.missing();
    if !missing.is_empty() {
        lines.push(format!("Warning: missing configuration: {}", missing.join(", ")));
    }
    lines.push(format!("Blacklisted users: {}", config.mentions.blacklist.len()));

    lines.join("\n")
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
