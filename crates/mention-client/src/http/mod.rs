//! HTTP client construction

mod client;

pub use client::{create_http_client, HttpClientConfig};
