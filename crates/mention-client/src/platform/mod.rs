//! GroupMe implementations of the collaborator traits

mod client;
mod error;
mod members;
mod messages;

pub use client::GroupMeClient;
