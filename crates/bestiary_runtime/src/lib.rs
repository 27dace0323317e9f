//! REPL, CLI, and serialization for Bestiary.
//!
//! This crate provides:
//! - [`Repl`] - An interactive parse inspector
//! - [`render_annotated`] - Text with its dice and spell references marked
//! - Entity serialization with `MessagePack`, and [`reparse_file`] to bring
//!   a saved file up to date with the current parsers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod format;
pub mod repl;
pub mod serialize;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use format::{Style, render_annotated};
pub use repl::{COMMANDS, Repl, Reply};
pub use serialize::{from_bytes, load_from_file, reparse_file, save_to_file, to_bytes};
pub use session::Session;
