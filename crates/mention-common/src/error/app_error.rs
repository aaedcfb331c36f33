//! Application error types
//!
//! Unified error handling for the entire application.

use mention_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration incomplete: missing {}", .missing.join(", "))]
    ConfigIncomplete { missing: Vec<&'static str> },

    #[error("Configuration error: {0}")]
    Config(String),

    // Inbound payload errors
    #[error("Malformed inbound payload: {0}")]
    MalformedPayload(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// The webhook caller only distinguishes success from failure, so every
    /// real failure is a 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_benign() => 200,
            Self::ConfigIncomplete { .. }
            | Self::Config(_)
            | Self::MalformedPayload(_)
            | Self::Domain(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigIncomplete { .. } => "CONFIG_INCOMPLETE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    #[must_use]
    pub fn config_incomplete(missing: Vec<&'static str>) -> Self {
        Self::ConfigIncomplete { missing }
    }

    #[must_use]
    pub fn malformed(msg: impl std::fmt::Display) -> Self {
        Self::MalformedPayload(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::ConfigIncomplete { missing } => Some(serde_json::json!({ "missing": missing })),
            _ => None,
        };
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}
