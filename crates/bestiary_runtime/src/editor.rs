//! Terminal input for the inspector.
//!
//! [`Repl`](crate::Repl) reads through [`LineEditor`]; the binary plugs in
//! [`RustylineEditor`], tests plug in a scripted queue.

use std::borrow::Cow;

use bestiary_foundation::{Error, ErrorKind, Result};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Context, Editor, Helper, Hinter, Validator};

use crate::repl::COMMANDS;

const COMMAND_COLOR: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// One attempt at reading input.
#[derive(Debug)]
pub enum ReadResult {
    /// The entered text, without its line break.
    Line(String),
    /// Ctrl+C abandoned the line.
    Interrupted,
    /// No more input.
    Eof,
}

/// Where the REPL gets its lines.
pub trait LineEditor {
    /// Shows `prompt` and waits for a line.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Remembers `line` for recall.
    fn add_history(&mut self, line: &str);
}

/// Command names starting with `prefix`, in help order.
///
/// Nothing completes once the line has an argument.
#[must_use]
pub fn command_completions(prefix: &str) -> Vec<&'static str> {
    if prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// Colors the leading `:command` of `line`, if there is one.
#[must_use]
pub fn highlight_command(line: &str) -> Cow<'_, str> {
    if !line.starts_with(':') {
        return Cow::Borrowed(line);
    }
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let (command, rest) = line.split_at(end);
    Cow::Owned(format!("{COMMAND_COLOR}{command}{RESET}{rest}"))
}

#[derive(Helper, Hinter, Validator)]
struct InspectorHelper {
    #[rustyline(Hinter)]
    history: HistoryHinter,
}

impl Completer for InspectorHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let found = command_completions(&line[..pos]);
        Ok((0, found.into_iter().map(str::to_string).collect()))
    }
}

impl Highlighter for InspectorHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        highlight_command(line)
    }

    fn highlight_char(&self, line: &str, _pos: usize, _kind: CmdKind) -> bool {
        line.starts_with(':')
    }
}

fn terminal_error(e: &ReadlineError) -> Error {
    Error::new(ErrorKind::Internal(format!("terminal: {e}")))
}

/// Reads lines from the terminal with history, hints, and `:command`
/// completion.
pub struct RustylineEditor {
    editor: Editor<InspectorHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Opens the terminal.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(false).build();
        let mut editor = Editor::with_config(config).map_err(|e| terminal_error(&e))?;
        editor.set_helper(Some(InspectorHelper {
            history: HistoryHinter::new(),
        }));
        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.editor.readline(prompt).map(ReadResult::Line).or_else(|e| match e {
            ReadlineError::Interrupted => Ok(ReadResult::Interrupted),
            ReadlineError::Eof => Ok(ReadResult::Eof),
            other => Err(terminal_error(&other)),
        })
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            log::debug!("history entry dropped: {e}");
        }
    }
}
