//! Input position for combinators.
//!
//! A [`Cursor`] is a `Copy` view of the input plus an offset. Parsers take
//! a cursor by value and hand back a new one on success, so a failed
//! alternative can never move the position its caller holds.

/// A position within a slice of `char`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'i> {
    text: &'i [char],
    position: usize,
}

impl<'i> Cursor<'i> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'i [char]) -> Self {
        Self { text, position: 0 }
    }

    /// Offset from the start of the input, in `char`s.
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Returns true if no input remains.
    #[must_use]
    pub const fn is_at_end(self) -> bool {
        self.position >= self.text.len()
    }

    /// The next `char`, without consuming it.
    #[must_use]
    pub fn peek(self) -> Option<char> {
        self.text.get(self.position).copied()
    }

    /// Consumes one `char`.
    #[must_use]
    pub fn next_char(self) -> Option<(char, Self)> {
        let c = self.peek()?;
        Some((c, self.advance(1)))
    }

    /// Moves forward by `n` chars, stopping at the end of input.
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        Self {
            position: (self.position + n).min(self.text.len()),
            ..self
        }
    }

    /// Moves to the end of input.
    #[must_use]
    pub const fn at_end(self) -> Self {
        Self {
            position: self.text.len(),
            ..self
        }
    }

    /// The unconsumed input.
    #[must_use]
    pub fn remaining(self) -> &'i [char] {
        &self.text[self.position.min(self.text.len())..]
    }

    /// Consumes `prefix` if the remaining input starts with it.
    #[must_use]
    pub fn strip_prefix(self, prefix: &[char]) -> Option<Self> {
        self.remaining()
            .starts_with(prefix)
            .then(|| self.advance(prefix.len()))
    }

    /// The text between `start` and this cursor.
    #[must_use]
    pub fn consumed_since(self, start: Cursor<'i>) -> String {
        self.text[start.position.min(self.position)..self.position]
            .iter()
            .collect()
    }

    /// The unconsumed input as a string.
    #[must_use]
    pub fn rest(self) -> String {
        self.remaining().iter().collect()
    }
}
