//! Error handling utilities for platform calls

use mention_core::error::DomainError;
use reqwest::StatusCode;

/// Longest response body excerpt carried into an error message
const MAX_BODY_EXCERPT: usize = 200;

/// Describe a transport error without the request URL, which carries the access token
pub fn describe_transport_error(e: reqwest::Error) -> String {
    let kind = if e.is_timeout() {
        "timed out"
    } else if e.is_connect() {
        "connection failed"
    } else if e.is_decode() {
        "invalid response body"
    } else {
        "request failed"
    };
    format!("{kind}: {}", e.without_url())
}

/// Describe a non-success response
pub fn describe_status(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {status}");
    }
    let excerpt: String = body.chars().take(MAX_BODY_EXCERPT).collect();
    format!("HTTP {status}: {excerpt}")
}

pub fn fetch_error(e: reqwest::Error) -> DomainError {
    DomainError::MemberFetchFailed(describe_transport_error(e))
}

pub fn dispatch_error(e: reqwest::Error) -> DomainError {
    DomainError::DispatchFailed(describe_transport_error(e))
}
