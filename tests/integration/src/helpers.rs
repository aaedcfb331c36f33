//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, mocking the platform API,
//! and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use mention_api::{create_app, create_app_state};
use mention_common::BotConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{ACCESS_TOKEN, BOT_ID, GROUP_ID};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server talking to the given mock platform
    pub async fn start(platform: &MockPlatform) -> Result<Self> {
        Self::start_with_config(test_config(&platform.uri(), &[])).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: BotConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config)?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            mention_api::server::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Deliver a callback payload to the webhook
    pub async fn post_callback(&self, body: &Value) -> Result<Response> {
        Ok(self.client.post(self.base_url()).json(body).send().await?)
    }

    /// Deliver a raw body to the webhook
    pub async fn post_raw(&self, body: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.base_url())
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }
}

/// Mocked platform REST API
pub struct MockPlatform {
    server: MockServer,
}

impl MockPlatform {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve the group lookup for the test credentials
    pub async fn mount_group(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/groups/{GROUP_ID}")))
            .and(query_param("token", ACCESS_TOKEN))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Accept bot posts with the given status
    pub async fn mount_bot_post(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/bots/post"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Bodies of every bot post received so far
    pub async fn bot_posts(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/bots/post")
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    /// Number of group lookups received so far
    pub async fn group_lookups(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path().starts_with("/groups/"))
            .count()
    }
}

/// Configuration pointing at the mock platform
///
/// Overrides replace the defaults; an empty value unsets a variable.
pub fn test_config(api_url: &str, overrides: &[(&str, &str)]) -> BotConfig {
    let mut vars: HashMap<String, String> = [
        ("GROUPME_API_URL", api_url),
        ("BOT_ID", BOT_ID),
        ("GROUP_ID", GROUP_ID),
        ("ACCESS_TOKEN", ACCESS_TOKEN),
        ("HTTP_TIMEOUT_SECS", "2"),
        ("MENTION_INTRO", "Summon:"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert((*k).to_string(), (*v).to_string());
    }

    BotConfig::from_lookup(|name| vars.get(name).cloned()).expect("test configuration is valid")
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
