//! # mention-client
//!
//! Platform layer implementing the collaborator traits against the GroupMe
//! REST API with reqwest.
//!
//! ## Overview
//!
//! This crate provides the HTTP implementations of the traits defined in
//! `mention-core`. It handles:
//!
//! - HTTP client construction with bounded timeouts
//! - Wire models for platform responses
//! - Model → entity mappers
//! - `MemberSource` and `MessageDispatcher` implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mention_client::{create_http_client, GroupMeClient, HttpClientConfig};
//! use mention_core::traits::MemberSource;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HttpClientConfig::default();
//!     let client = GroupMeClient::new(create_http_client(&config)?, "https://api.groupme.com/v3");
//!     let members = client.fetch_members("1234", "token").await?;
//!     Ok(())
//! }
//! ```

pub mod http;
pub mod mappers;
pub mod models;
pub mod platform;

// Re-export commonly used types
pub use http::{create_http_client, HttpClientConfig};
pub use platform::GroupMeClient;
