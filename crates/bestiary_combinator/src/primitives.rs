//! Primitive parsers: characters, literals, numbers, words, and whitespace.

use crate::combinators::{many0, one_or_more};
use crate::cursor::Cursor;
use crate::parser::Parser;

/// Matches one `char` satisfying `predicate`.
pub fn satisfy(predicate: impl Fn(char) -> bool + 'static) -> Parser<char> {
    Parser::new(move |cursor: Cursor<'_>| {
        let (c, rest) = cursor.next_char()?;
        predicate(c).then_some((c, rest))
    })
}

/// Matches exactly `expected`.
pub fn character(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Matches any one of the chars in `set`.
pub fn one_of(set: &'static str) -> Parser<char> {
    satisfy(move |c| set.contains(c))
}

/// Matches an ASCII digit.
pub fn digit() -> Parser<char> {
    satisfy(|c| c.is_ascii_digit())
}

/// Matches `text` exactly, yielding it.
pub fn literal(text: impl Into<String>) -> Parser<String> {
    let text: String = text.into();
    let expected: Vec<char> = text.chars().collect();
    Parser::new(move |cursor| {
        let rest = cursor.strip_prefix(&expected)?;
        Some((text.clone(), rest))
    })
}

/// Matches one or more digits as a non-negative `i32`.
///
/// Fails on overflow.
pub fn int() -> Parser<i32> {
    one_or_more(digit()).flat_map(|digits| {
        digits.into_iter().try_fold(0i32, |acc, d| {
            let d = i32::try_from(d.to_digit(10)?).ok()?;
            acc.checked_mul(10)?.checked_add(d)
        })
    })
}

/// Matches an integer with an optional leading `+` or `-`.
pub fn signed_int() -> Parser<i32> {
    one_of("+-")
        .optional()
        .followed_by(int())
        .map(|(sign, n)| if sign == Some('-') { -n } else { n })
}

/// Matches a word: letters, digits, and apostrophes.
pub fn word() -> Parser<String> {
    one_or_more(satisfy(|c| c.is_alphanumeric() || matches!(c, '\'' | '＇' | '’'))).collected()
}

/// Matches one or more spaces or tabs.
pub fn horizontal_whitespace() -> Parser<String> {
    one_or_more(one_of(" \t")).collected()
}

/// Matches one or more line breaks.
pub fn vertical_whitespace() -> Parser<String> {
    one_or_more(one_of("\r\n")).collected()
}

/// Matches one or more whitespace chars of either kind.
pub fn whitespace() -> Parser<String> {
    one_or_more(one_of(" \t\r\n")).collected()
}

/// Consumes all remaining input.
pub fn remainder() -> Parser<String> {
    Parser::new(|cursor| Some((cursor.rest(), cursor.at_end())))
}

/// Succeeds only at the end of input.
pub fn end() -> Parser<()> {
    Parser::new(|cursor| cursor.is_at_end().then_some(((), cursor)))
}

/// Succeeds without consuming anything.
pub fn nothing() -> Parser<()> {
    Parser::new(|cursor| Some(((), cursor)))
}

/// Never succeeds.
pub fn never<A: 'static>() -> Parser<A> {
    Parser::new(|_| None)
}

/// Zero or more chars matching `predicate`, as a string.
pub fn chars_while(predicate: impl Fn(char) -> bool + 'static) -> Parser<String> {
    many0(satisfy(predicate)).collected()
}

/// Lowercases `text` one `char` at a time.
///
/// A `char` whose lowercase form is longer than one `char` is kept as is, so
/// offsets into the result are also valid offsets into `text`.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        })
        .collect()
}
