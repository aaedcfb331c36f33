//! Platform wire models

mod group;

pub use group::{GroupEnvelope, GroupModel, MemberModel};
