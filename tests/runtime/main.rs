//! Integration tests for Layer 5: Runtime
//!
//! Tests the inspector REPL end to end and the `MessagePack` store.

mod codec;
