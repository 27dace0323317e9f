//! Backtracking parser combinators for Bestiary.
//!
//! Every parser is a function from a [`Cursor`] to an optional value and a
//! new cursor. Cursors are `Copy`, so backtracking is by value: each branch
//! of an [`either`] starts from an identical copy of the position, and a
//! failed parser has nothing to undo.
//!
//! ```text
//! "reach 5 ft., one target"
//!   │
//!   ▼  zip(literal("reach "), int(), whitespace(), literal("ft."))
//! ┌──────────────────────┐
//! │ Cursor { pos: 0 }    │ ─▶ ("reach ", 5, " ", "ft.")  Cursor { pos: 11 }
//! └──────────────────────┘
//! ```
//!
//! There is no memoization. Alternatives re-scan from scratch, which is fine
//! for sentence-sized inputs.
//!
//! # Modules
//!
//! - [`cursor`] - Input positions
//! - [`parser`] - The [`Parser`] type and its adapters
//! - [`primitives`] - Characters, literals, numbers, words, whitespace
//! - [`combinators`] - Repetition, alternation, sequencing, skipping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc)]

pub mod combinators;
pub mod cursor;
pub mod parser;
pub mod primitives;

pub use combinators::{
    either, many, many0, one_or_more, skip_until, zip, zip3, zip4, zip5, zip6, zip7,
};
pub use cursor::Cursor;
pub use parser::Parser;
pub use primitives::{
    character, chars_while, digit, end, fold_case, horizontal_whitespace, int, literal, never,
    nothing, one_of, remainder, satisfy, signed_int, vertical_whitespace, whitespace, word,
};
