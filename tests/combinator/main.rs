//! Integration tests for Layer 1: Combinators
//!
//! Tests backtracking, located matching, and properties of the core
//! combinators on realistic stat block fragments.

mod backtracking;
mod properties;
