//! Core types for Bestiary.
//!
//! This crate provides:
//! - [`Located`] - Values tagged with the source range they came from
//! - [`DiceExpression`] - Dice formulas such as `2d6 + 3`
//! - [`TextAnnotation`] - Highlights laid over source text
//! - [`CompendiumItemKey`] - Identity of compendium items
//! - [`Parseable`] - Raw input plus a version-tagged cached parse result
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod dice;
pub mod error;
pub mod key;
pub mod located;
pub mod parseable;

pub use annotation::{CompendiumItemReferenceAnnotation, TextAnnotation, sorted_annotations};
pub use dice::{DiceExpression, Die, Operator};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use key::{
    CompendiumItemKey, CompendiumItemReference, CompendiumItemType, KEY_SEPARATOR, RealmId,
};
pub use located::{Located, char_range_to_bytes};
pub use parseable::{CacheState, DomainModel, DomainParser, Parseable, ParserResult};
