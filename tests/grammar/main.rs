//! Integration tests for Layer 2: Grammars
//!
//! Tests the domain parsers on stat block text as it appears in published
//! monster entries, through the versioned descriptors.

mod actions;
mod features;
mod properties;
