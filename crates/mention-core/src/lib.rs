//! # mention-core
//!
//! Domain layer for the mention-all bot: members, mention spans and
//! attachments, trigger detection, the mention builder, and the traits the
//! platform integration implements.
//! This crate has zero dependencies on infrastructure (HTTP client, web framework, etc.).

pub mod entities;
pub mod error;
pub mod mention;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BotPost, IncomingMessage, Member, Mention, MentionAttachment, MentionMessage, MentionSpan,
    SenderType,
};
pub use error::DomainError;
pub use mention::{detect, Decision, MemberFilter, MentionBuilder, TRIGGER_PHRASE};
pub use traits::{MemberSource, MessageDispatcher, PlatformResult};
pub use value_objects::{Blacklist, OffsetUnit};
