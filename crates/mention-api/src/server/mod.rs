//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use mention_client::{create_http_client, GroupMeClient, HttpClientConfig};
use mention_common::{AppError, BotConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config().platform.request_timeout();
    let router = create_router();
    let router = apply_middleware(router, request_timeout);
    router.with_state(state)
}

/// Create the platform client and AppState
pub fn create_app_state(config: BotConfig) -> Result<AppState, AppError> {
    let http = create_http_client(&HttpClientConfig::with_timeout(config.platform.timeout))
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;
    let client = Arc::new(GroupMeClient::new(http, config.platform.api_url.clone()));
    info!(
        api_url = %client.api_url(),
        timeout = ?config.platform.timeout,
        request_timeout = ?config.platform.request_timeout(),
        "Platform client ready"
    );

    Ok(AppState::new(config, client.clone(), client))
}

/// Serve on an already bound listener until ctrl-c
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))
}

/// Bind and run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: BotConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
