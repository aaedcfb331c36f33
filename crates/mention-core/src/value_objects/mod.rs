//! Value objects - immutable types that represent domain concepts

mod blacklist;
mod offset_unit;

pub use blacklist::Blacklist;
pub use offset_unit::{OffsetUnit, OffsetUnitParseError};
