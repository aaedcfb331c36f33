//! Member entity - a user's membership in the configured group

/// Group member as reported by the member source
///
/// Identity is `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub user_id: String,
    pub nickname: String,
    pub membership_id: String,
}

impl Member {
    /// Create a new Member without a membership id
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            membership_id: String::new(),
        }
    }

    /// Set the membership id
    pub fn with_membership_id(mut self, membership_id: impl Into<String>) -> Self {
        self.membership_id = membership_id.into();
        self
    }

    /// The visible mention token for this member (`@nickname`)
    pub fn mention_token(&self) -> String {
        format!("@{}", self.nickname)
    }
}
