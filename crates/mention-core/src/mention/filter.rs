//! Member filter - which members are eligible for mention-all

use crate::entities::Member;
use crate::value_objects::Blacklist;

/// Eligibility predicate: blacklist plus optional sender exclusion
#[derive(Debug, Clone, Copy)]
pub struct MemberFilter<'a> {
    blacklist: &'a Blacklist,
    excluded_user: Option<&'a str>,
}

impl<'a> MemberFilter<'a> {
    pub fn new(blacklist: &'a Blacklist) -> Self {
        Self {
            blacklist,
            excluded_user: None,
        }
    }

    /// Also skip the given user (typically whoever sent the trigger)
    pub fn excluding(mut self, user_id: &'a str) -> Self {
        self.excluded_user = Some(user_id);
        self
    }

    pub fn keeps(&self, member: &Member) -> bool {
        if self.blacklist.contains(&member.user_id) {
            return false;
        }
        self.excluded_user != Some(member.user_id.as_str())
    }
}
