//! Integration tests for Layer 0: Foundation
//!
//! Tests for the parse cache as it is persisted: decoding older stores,
//! results from older models, and the cache contract across real grammars.
//! Also holds the workspace-wide source width check.

mod cache;
mod persistence;
mod source_width;
