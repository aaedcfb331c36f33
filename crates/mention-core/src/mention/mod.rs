//! Mention-all logic - trigger detection, member filtering and mention building

mod builder;
mod detector;
mod filter;
mod texts;

pub use builder::MentionBuilder;
pub use detector::{detect, Decision, TRIGGER_PHRASE};
pub use filter::MemberFilter;
pub use texts::{fetch_failed_text, no_eligible_text, render_intro, DEFAULT_INTRO_TEMPLATE, SENDER_PLACEHOLDER};
