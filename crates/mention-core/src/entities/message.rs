//! Message entities - inbound webhook callbacks and outbound bot posts

use serde::{Deserialize, Serialize};

use super::mention::MentionAttachment;

/// Display name used when the callback carries no sender name
pub const DEFAULT_SENDER_NAME: &str = "Someone";

/// Who authored an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Bot,
    System,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Message callback delivered by the platform to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// `null` for attachment-only posts
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub sender_type: SenderType,
    #[serde(rename = "name", default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl IncomingMessage {
    /// Create a user message
    pub fn from_user(sender_id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sender_type: SenderType::User,
            sender_name: Some(name.into()),
            sender_id: sender_id.into(),
            group_id: None,
        }
    }

    /// Message text, empty when absent
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Sender display name with a fallback for anonymous callbacks
    pub fn sender_name(&self) -> &str {
        match self.sender_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_SENDER_NAME,
        }
    }

    #[inline]
    pub fn is_from_bot(&self) -> bool {
        self.sender_type == SenderType::Bot
    }
}

/// Outbound post made by the bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotPost {
    pub bot_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<MentionAttachment>,
}

impl BotPost {
    /// Plain text post without attachments
    pub fn plain(bot_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            bot_id: bot_id.into(),
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// Post carrying a single mention attachment
    pub fn with_mentions(bot_id: impl Into<String>, text: impl Into<String>, attachment: MentionAttachment) -> Self {
        Self {
            bot_id: bot_id.into(),
            text: text.into(),
            attachments: vec![attachment],
        }
    }
}
