//! Blacklist - user ids that are never mentioned

use std::collections::HashSet;

/// Set of user ids excluded from mention-all
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist(HashSet<String>);

impl Blacklist {
    /// Empty blacklist
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of user ids
    ///
    /// Entries are trimmed and empty entries are skipped, so `" u1, ,u2 "`
    /// yields `{u1, u2}`.
    pub fn from_csv(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }

    #[inline]
    pub fn contains(&self, user_id: &str) -> bool {
        self.0.contains(user_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
