//! Member mapper

use mention_core::entities::Member;

use crate::models::{GroupModel, MemberModel};

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Self {
            user_id: model.user_id,
            nickname: model.nickname.unwrap_or_default(),
            membership_id: model.id.unwrap_or_default(),
        }
    }
}

/// Members of a group, in platform order
pub fn members_from_group(group: GroupModel) -> Vec<Member> {
    group.members.into_iter().map(Member::from).collect()
}
