//! Mention builder - reply text and mention attachment construction
//!
//! The reply is `intro + " " + "@nick1 @nick2 ..."`. Each span records where
//! its `@nickname` token lands in that text, measured in the builder's
//! [`OffsetUnit`]. The text is assembled token by token with the running
//! offset advanced by exactly what was appended, so the spans and the text
//! cannot drift apart.

use crate::entities::{Member, Mention, MentionAttachment, MentionMessage, MentionSpan};
use crate::error::DomainError;
use crate::value_objects::{Blacklist, OffsetUnit};

use super::filter::MemberFilter;

/// Joins the intro and the mention tokens
const SEPARATOR: &str = " ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentionBuilder {
    unit: OffsetUnit,
}

impl MentionBuilder {
    pub fn new(unit: OffsetUnit) -> Self {
        Self { unit }
    }

    /// Mention every member not in `blacklist`
    pub fn build(&self, intro: &str, members: &[Member], blacklist: &Blacklist) -> Result<MentionMessage, DomainError> {
        self.build_filtered(intro, members, &MemberFilter::new(blacklist))
    }

    /// Mention every member the filter keeps
    pub fn build_filtered(
        &self,
        intro: &str,
        members: &[Member],
        filter: &MemberFilter<'_>,
    ) -> Result<MentionMessage, DomainError> {
        self.build_with(intro, members, |member| filter.keeps(member))
    }

    /// Mention every member for which `keep` returns true, in input order
    ///
    /// Duplicate user ids are mentioned once per occurrence. Returns
    /// `NoEligibleMembers` when nothing is kept.
    pub fn build_with<F>(&self, intro: &str, members: &[Member], keep: F) -> Result<MentionMessage, DomainError>
    where
        F: Fn(&Member) -> bool,
    {
        let separator_len = self.unit.measure(SEPARATOR);
        let mut text = intro.trim().to_string();
        let mut offset = self.unit.measure(&text);
        let mut mentions = Vec::new();

        for member in members.iter().filter(|m| keep(m)) {
            if !text.is_empty() {
                text.push_str(SEPARATOR);
                offset += separator_len;
            }
            let token = member.mention_token();
            let length = self.unit.measure(&token);
            mentions.push(Mention::new(member.user_id.clone(), MentionSpan::new(offset, length)));
            text.push_str(&token);
            offset += length;
        }

        if mentions.is_empty() {
            return Err(DomainError::NoEligibleMembers);
        }

        debug_assert_eq!(offset, self.unit.measure(&text));

        Ok(MentionMessage {
            text,
            attachment: MentionAttachment::new(mentions),
        })
    }
}
