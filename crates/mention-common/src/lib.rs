//! # mention-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppSettings, BotConfig, ConfigError, Environment, GroupCredentials, MentionConfig,
    PlatformConfig, ServerConfig,
};
pub use error::{AppError, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
