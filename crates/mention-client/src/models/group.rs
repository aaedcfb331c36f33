//! Group response models

use serde::Deserialize;

/// Top-level envelope of every platform response: `{"response": ..., "meta": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct GroupEnvelope {
    pub response: Option<GroupModel>,
}

/// Group details; only the member list is used
#[derive(Debug, Clone, Deserialize)]
pub struct GroupModel {
    #[serde(default)]
    pub members: Vec<MemberModel>,
}

/// Member as listed in a group response
#[derive(Debug, Clone, Deserialize)]
pub struct MemberModel {
    pub user_id: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Membership id
    #[serde(default)]
    pub id: Option<String>,
}
