//! Bestiary - versioned parsing of creature stat block text
//!
//! This crate re-exports all layers of the Bestiary system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: bestiary_runtime     — Parse inspector REPL, CLI, serialization
//! Layer 4: bestiary_visitor     — Visitors over the entity graph, re-parse passes
//! Layer 3: bestiary_models      — Stat blocks, compendium, encounters
//! Layer 2: bestiary_grammar     — Domain grammars and versioned parsers
//! Layer 1: bestiary_combinator  — Located parser combinators over text
//! Layer 0: bestiary_foundation  — Errors, keys, dice, Parseable cache
//! ```

pub use bestiary_combinator as combinator;
pub use bestiary_foundation as foundation;
pub use bestiary_grammar as grammar;
pub use bestiary_models as models;
pub use bestiary_runtime as runtime;
pub use bestiary_visitor as visitor;
