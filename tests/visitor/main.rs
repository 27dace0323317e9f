//! Integration tests for Layer 4: Visitors
//!
//! Tests visitor passes over whole entity graphs: re-parsing after a
//! parser change, and rewrites after compendium documents move.

mod fixtures;
mod reparse;
mod rewrites;
