//! Mention entities - spans, mentions and the platform's mention attachment
//!
//! Mentions are kept as `(user_id, span)` pairs. The two parallel arrays the
//! platform expects (`user_ids`, `loci`) only exist in the wire representation.

use serde::{Deserialize, Serialize};

/// Location of one `@nickname` token inside a message text
///
/// Serialized as the two-element array `[start, length]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct MentionSpan {
    pub start: usize,
    pub length: usize,
}

impl MentionSpan {
    #[inline]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

impl From<[usize; 2]> for MentionSpan {
    fn from([start, length]: [usize; 2]) -> Self {
        Self { start, length }
    }
}

impl From<MentionSpan> for [usize; 2] {
    fn from(span: MentionSpan) -> Self {
        [span.start, span.length]
    }
}

/// A single mentioned user and where the mention sits in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub user_id: String,
    pub span: MentionSpan,
}

impl Mention {
    pub fn new(user_id: impl Into<String>, span: MentionSpan) -> Self {
        Self {
            user_id: user_id.into(),
            span,
        }
    }
}

/// Attachment type tag used by the platform
pub const MENTIONS_ATTACHMENT_TYPE: &str = "mentions";

/// The platform's `mentions` attachment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "MentionAttachmentWire", try_from = "MentionAttachmentWire")]
pub struct MentionAttachment {
    mentions: Vec<Mention>,
}

impl MentionAttachment {
    pub fn new(mentions: Vec<Mention>) -> Self {
        Self { mentions }
    }

    #[inline]
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    /// Mentioned user ids, in mention order
    pub fn user_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.mentions.iter().map(|m| m.user_id.as_str())
    }

    /// Spans, in mention order
    pub fn loci(&self) -> impl Iterator<Item = MentionSpan> + '_ {
        self.mentions.iter().map(|m| m.span)
    }
}

/// Wire shape: `{"type": "mentions", "user_ids": [...], "loci": [[s, l], ...]}`
#[derive(Debug, Serialize, Deserialize)]
struct MentionAttachmentWire {
    #[serde(rename = "type")]
    kind: String,
    user_ids: Vec<String>,
    loci: Vec<MentionSpan>,
}

impl From<MentionAttachment> for MentionAttachmentWire {
    fn from(attachment: MentionAttachment) -> Self {
        let (user_ids, loci) = attachment
            .mentions
            .into_iter()
            .map(|m| (m.user_id, m.span))
            .unzip();
        Self {
            kind: MENTIONS_ATTACHMENT_TYPE.to_string(),
            user_ids,
            loci,
        }
    }
}

impl TryFrom<MentionAttachmentWire> for MentionAttachment {
    type Error = String;

    fn try_from(wire: MentionAttachmentWire) -> Result<Self, Self::Error> {
        if wire.kind != MENTIONS_ATTACHMENT_TYPE {
            return Err(format!("unexpected attachment type: {}", wire.kind));
        }
        if wire.user_ids.len() != wire.loci.len() {
            return Err(format!(
                "user_ids and loci differ in length ({} vs {})",
                wire.user_ids.len(),
                wire.loci.len()
            ));
        }
        let mentions = wire
            .user_ids
            .into_iter()
            .zip(wire.loci)
            .map(|(user_id, span)| Mention { user_id, span })
            .collect();
        Ok(Self { mentions })
    }
}

/// Output of the mention builder: the reply text and its attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionMessage {
    pub text: String,
    pub attachment: MentionAttachment,
}
