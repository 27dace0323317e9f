//! The [`Parser`] type and its adapter methods.

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use bestiary_foundation::Located;

use crate::combinators::{many0, skip_until};
use crate::cursor::Cursor;

type ParseFn<A> = dyn for<'i> Fn(Cursor<'i>) -> Option<(A, Cursor<'i>)>;

/// A backtracking parser producing values of type `A`.
///
/// Parsers are cheap to clone (the parse function is shared) and are built
/// fresh by the grammar functions that need them.
pub struct Parser<A> {
    run: Rc<ParseFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser")
    }
}

impl<A: 'static> Parser<A> {
    /// Wraps a parse function.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'i> Fn(Cursor<'i>) -> Option<(A, Cursor<'i>)> + 'static,
    {
        Self { run: Rc::new(f) }
    }

    /// Parses at `cursor`.
    pub fn parse<'i>(&self, cursor: Cursor<'i>) -> Option<(A, Cursor<'i>)> {
        (self.run)(cursor)
    }

    /// Parses from the start of `input`. Trailing input is allowed.
    pub fn run(&self, input: &str) -> Option<A> {
        self.run_partial(input).map(|(value, _)| value)
    }

    /// Parses from the start of `input`, also returning the unconsumed rest.
    pub fn run_partial(&self, input: &str) -> Option<(A, String)> {
        let chars: Vec<char> = input.chars().collect();
        self.parse(Cursor::new(&chars))
            .map(|(value, rest)| (value, rest.rest()))
    }

    /// Finds every non-overlapping match in `input`, scanning left to right.
    pub fn matches(&self, input: &str) -> Vec<Located<A>> {
        many0(self.clone().located().skipping_any_before())
            .run(input)
            .unwrap_or_default()
    }

    /// Transforms the parsed value.
    #[must_use]
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + 'static) -> Parser<B> {
        Parser::new(move |cursor| {
            let (value, rest) = self.parse(cursor)?;
            Some((f(value), rest))
        })
    }

    /// Transforms the parsed value; `None` turns the match into a failure.
    #[must_use]
    pub fn flat_map<B: 'static>(self, f: impl Fn(A) -> Option<B> + 'static) -> Parser<B> {
        Parser::new(move |cursor| {
            let (value, rest) = self.parse(cursor)?;
            Some((f(value)?, rest))
        })
    }

    /// Discards the parsed value.
    #[must_use]
    pub fn ignored(self) -> Parser<()> {
        self.map(|_| ())
    }

    /// Runs `next` after this parser; both must succeed.
    #[must_use]
    pub fn followed_by<B: 'static>(self, next: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |cursor| {
            let (a, rest) = self.parse(cursor)?;
            let (b, rest) = next.parse(rest)?;
            Some(((a, b), rest))
        })
    }

    /// Tries this parser, then `other` from the same position.
    #[must_use]
    pub fn or(self, other: Parser<A>) -> Parser<A> {
        Parser::new(move |cursor| self.parse(cursor).or_else(|| other.parse(cursor)))
    }

    /// Always succeeds, yielding `None` without consuming input on failure.
    #[must_use]
    pub fn optional(self) -> Parser<Option<A>> {
        Parser::new(move |cursor| match self.parse(cursor) {
            Some((value, rest)) => Some((Some(value), rest)),
            None => Some((None, cursor)),
        })
    }

    /// Pairs the value with the `char` range it consumed.
    #[must_use]
    pub fn with_range(self) -> Parser<(A, Range<usize>)> {
        Parser::new(move |cursor| {
            let (value, rest) = self.parse(cursor)?;
            Some(((value, cursor.position()..rest.position()), rest))
        })
    }

    /// Like [`Parser::with_range`], producing a [`Located`].
    #[must_use]
    pub fn located(self) -> Parser<Located<A>> {
        self.with_range()
            .map(|(value, range)| Located::new(value, range))
    }

    /// Skips any input until this parser matches.
    #[must_use]
    pub fn skipping_any_before(self) -> Parser<A> {
        skip_until(self).map(|(_, value)| value)
    }

    /// Allows `padding` on either side.
    #[must_use]
    pub fn trimming<B: 'static>(self, padding: Parser<B>) -> Parser<A> {
        Parser::new(move |cursor| {
            let cursor = padding.parse(cursor).map_or(cursor, |(_, rest)| rest);
            let (value, rest) = self.parse(cursor)?;
            let rest = padding.parse(rest).map_or(rest, |(_, after)| after);
            Some((value, rest))
        })
    }

    /// Emits a `trace!` record for every attempt.
    #[must_use]
    pub fn log(self, label: &'static str) -> Parser<A>
    where
        A: fmt::Debug,
    {
        Parser::new(move |cursor| {
            let result = self.parse(cursor);
            match &result {
                Some((value, rest)) => log::trace!(
                    "{label}: matched {value:?} at {}..{}",
                    cursor.position(),
                    rest.position()
                ),
                None => log::trace!("{label}: no match at {}", cursor.position()),
            }
            result
        })
    }
}

impl Parser<Vec<String>> {
    /// Joins the parsed strings with `separator`.
    #[must_use]
    pub fn joined(self, separator: &'static str) -> Parser<String> {
        self.map(move |parts| parts.join(separator))
    }
}

impl Parser<Vec<char>> {
    /// Collects the parsed chars into a string.
    #[must_use]
    pub fn collected(self) -> Parser<String> {
        self.map(|chars| chars.into_iter().collect())
    }
}
