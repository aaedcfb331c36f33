//! Offset unit - how mention span offsets and lengths are counted
//!
//! The platform indexes message text in an unspecified unit. Every span the
//! builder emits is measured in exactly one of these units, and the same unit
//! is used to locate spans again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::MentionSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values (code points)
    #[default]
    Chars,
    /// UTF-16 code units, the way JavaScript clients index strings
    Utf16,
    /// UTF-8 bytes
    Bytes,
}

impl OffsetUnit {
    /// Width of a single character in this unit
    #[inline]
    fn width(self, c: char) -> usize {
        match self {
            Self::Chars => 1,
            Self::Utf16 => c.len_utf16(),
            Self::Bytes => c.len_utf8(),
        }
    }

    /// Length of `s` in this unit
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Utf16 => s.encode_utf16().count(),
            Self::Bytes => s.len(),
        }
    }

    /// Byte index of `offset` in `text`, if it lands on a character boundary
    fn byte_index(self, text: &str, offset: usize) -> Option<usize> {
        let mut units = 0;
        for (idx, c) in text.char_indices() {
            if units == offset {
                return Some(idx);
            }
            if units > offset {
                return None;
            }
            units += self.width(c);
        }
        (units == offset).then_some(text.len())
    }

    /// Substring of `text` covered by `span`
    ///
    /// Returns `None` when the span is out of range or splits a character.
    pub fn locate(self, text: &str, span: MentionSpan) -> Option<&str> {
        let start = self.byte_index(text, span.start)?;
        let end = self.byte_index(text, span.end())?;
        text.get(start..end)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::Utf16 => "utf16",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown offset unit '{0}' (expected chars, utf16 or bytes)")]
pub struct OffsetUnitParseError(String);

impl FromStr for OffsetUnit {
    type Err = OffsetUnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "char" | "codepoints" => Ok(Self::Chars),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            "bytes" | "utf8" | "utf-8" => Ok(Self::Bytes),
            other => Err(OffsetUnitParseError(other.to_string())),
        }
    }
}
