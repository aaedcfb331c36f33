//! reqwest client construction

use std::time::Duration;

/// Settings for the outbound HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for one request, including reading the body
    pub timeout: Duration,
    /// Maximum time to establish a connection
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("mention-all-bot/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Config with an overall request timeout; the connect timeout never exceeds it
    pub fn with_timeout(timeout: Duration) -> Self {
        let defaults = Self::default();
        Self {
            timeout,
            connect_timeout: defaults.connect_timeout.min(timeout),
            ..defaults
        }
    }
}

/// Create the shared HTTP client
pub fn create_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
}
