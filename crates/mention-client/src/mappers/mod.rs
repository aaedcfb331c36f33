//! Model → entity mappers

mod member;

pub use member::members_from_group;
