//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Nobody is left to mention after filtering
    #[error("No eligible members to mention")]
    NoEligibleMembers,

    // =========================================================================
    // Collaborator Errors (wrapped)
    // =========================================================================
    #[error("Failed to fetch group members: {0}")]
    MemberFetchFailed(String),

    #[error("Failed to dispatch message: {0}")]
    DispatchFailed(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoEligibleMembers => "NO_ELIGIBLE_MEMBERS",
            Self::MemberFetchFailed(_) => "MEMBER_FETCH_FAILED",
            Self::DispatchFailed(_) => "DISPATCH_FAILED",
        }
    }

    /// A benign outcome that should not be reported as an error status
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NoEligibleMembers)
    }

    pub fn member_fetch(msg: impl Into<String>) -> Self {
        Self::MemberFetchFailed(msg.into())
    }

    pub fn dispatch(msg: impl Into<String>) -> Self {
        Self::DispatchFailed(msg.into())
    }
}
