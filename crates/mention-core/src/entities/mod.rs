//! Domain entities - members, messages and mentions

mod member;
mod mention;
mod message;

pub use member::Member;
pub use mention::{Mention, MentionAttachment, MentionMessage, MentionSpan, MENTIONS_ATTACHMENT_TYPE};
pub use message::{BotPost, IncomingMessage, SenderType, DEFAULT_SENDER_NAME};
