//! GroupMe REST client

/// Client for the GroupMe v3 REST API
///
/// Implements [`MemberSource`](mention_core::traits::MemberSource) and
/// [`MessageDispatcher`](mention_core::traits::MessageDispatcher). Cheap to
/// clone; the underlying reqwest client is reference counted.
#[derive(Debug, Clone)]
pub struct GroupMeClient {
    http: reqwest::Client,
    api_url: String,
}

impl GroupMeClient {
    /// Create a new GroupMeClient for the given API base URL
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { http, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub(super) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for an API path such as `bots/post`
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
