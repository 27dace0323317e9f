//! Source location tracking for parsed values.
//!
//! A [`Located`] value remembers which part of the source text it was
//! derived from. Offsets count Unicode scalar values (`char`s), not bytes,
//! so they survive case folding and can be mapped back onto the original
//! string with [`Located::byte_range`].

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value paired with the half-open `char` range it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Located<T> {
    /// The parsed value.
    pub value: T,
    /// Start (inclusive) and end (exclusive) offsets, in `char`s.
    pub range: Range<usize>,
}

impl<T> Located<T> {
    /// Creates a located value.
    #[must_use]
    pub const fn new(value: T, range: Range<usize>) -> Self {
        Self { value, range }
    }

    /// Transforms the value, keeping the range.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            value: f(self.value),
            range: self.range,
        }
    }

    /// Returns the number of `char`s covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    /// Returns true if the range covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the `char` range into a byte range of `text`.
    ///
    /// Returns `None` if the range does not fit in `text`.
    #[must_use]
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        char_range_to_bytes(text, &self.range)
    }

    /// Returns the slice of `text` this value was parsed from.
    #[must_use]
    pub fn text<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.byte_range(text).map(|bytes| &text[bytes])
    }
}

/// Converts a `char` offset range into the equivalent byte range of `text`.
#[must_use]
pub fn char_range_to_bytes(text: &str, range: &Range<usize>) -> Option<Range<usize>> {
    if range.start > range.end {
        return None;
    }
    let start = char_to_byte(text, range.start)?;
    let end = char_to_byte(text, range.end)?;
    Some(start..end)
}

fn char_to_byte(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}
