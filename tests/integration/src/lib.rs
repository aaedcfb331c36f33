//! Integration test utilities for the mention-all bot
//!
//! This crate provides helpers for running end-to-end tests against the
//! webhook server with the platform API mocked by wiremock.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
