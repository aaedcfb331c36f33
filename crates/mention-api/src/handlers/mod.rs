//! Route handlers

pub mod health;
pub mod webhook;

#[cfg(test)]
pub(crate) mod test_support;
