//! Collaborator traits (ports)

mod collaborators;

pub use collaborators::{MemberSource, MessageDispatcher, PlatformResult};
