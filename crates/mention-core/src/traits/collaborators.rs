//! Collaborator traits (ports) - the platform calls the domain depends on
//!
//! The domain layer defines what it needs from the messaging platform and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{BotPost, Member};
use crate::error::DomainError;

/// Result type for platform operations
pub type PlatformResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Source
// ============================================================================

#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetch the members of a group in the order the platform lists them
    ///
    /// Failures of any kind (network, timeout, status, body) are reported as
    /// `DomainError::MemberFetchFailed`.
    async fn fetch_members(&self, group_id: &str, access_token: &str) -> PlatformResult<Vec<Member>>;
}

// ============================================================================
// Message Dispatcher
// ============================================================================

#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    /// Post a message as the bot; single attempt, never retried
    ///
    /// Failures are reported as `DomainError::DispatchFailed`.
    async fn dispatch(&self, post: &BotPost) -> PlatformResult<()>;
}
