//! Reply texts

/// Placeholder replaced by the sender's display name
pub const SENDER_PLACEHOLDER: &str = "{sender}";

pub const DEFAULT_INTRO_TEMPLATE: &str = "Tagging everyone! (Triggered by {sender})";

/// Render the intro that precedes the mentions
pub fn render_intro(template: &str, sender_name: &str) -> String {
    template.replace(SENDER_PLACEHOLDER, sender_name)
}

/// Apology posted when the member list could not be fetched
pub fn fetch_failed_text(sender_name: &str) -> String {
    format!("Sorry {sender_name}, I couldn't fetch the group members to tag everyone.")
}

/// Notice posted when every member was filtered out
pub fn no_eligible_text(sender_name: &str) -> String {
    format!("Sorry {sender_name}, there is nobody to tag.")
}
