//! Command detector - decides whether an inbound message asks for mention-all

use crate::entities::IncomingMessage;

/// Trigger phrase, matched case-insensitively anywhere in the text
pub const TRIGGER_PHRASE: &str = "@all";

/// What to do with an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Ignore,
    Trigger,
}

/// Inspect an inbound message
///
/// Bot messages are always ignored, including the bot's own replies, which
/// contain the mentions it just sent.
pub fn detect(message: &IncomingMessage) -> Decision {
    if message.is_from_bot() {
        return Decision::Ignore;
    }
    if message.text().to_lowercase().contains(TRIGGER_PHRASE) {
        Decision::Trigger
    } else {
        Decision::Ignore
    }
}
