//! The parse inspector REPL.
//!
//! Each line is a `:command` followed by its argument. Text without a
//! command is inspected as an action description.

use std::path::Path;

use bestiary_foundation::{Error, Result};
use bestiary_grammar::{CreatureAction, CreatureFeature};

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::format::Style;
use crate::session::Session;

/// Commands and their help lines.
pub const COMMANDS: &[(&str, &str)] = &[
    (":action", ":action <name> | <description>   parse a creature action"),
    (":feature", ":feature <name> | <description>  parse a creature feature"),
    (":spell", ":spell <description>              find dice in a spell description"),
    (":type", ":type <text>                      find the monster type"),
    (":dice", ":dice <text>                      list dice expressions"),
    (":reparse", ":reparse                          re-parse everything held"),
    (":save", ":save <path>                      write entities to a file"),
    (":load", ":load <path>                      read entities from a file"),
    (":clear", ":clear                            forget everything"),
    (":help", ":help                             show this help"),
    (":quit", ":quit                             leave"),
];

/// What a line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this and keep going.
    Output(String),
    /// Nothing to print.
    Silent,
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, config: &RuntimeConfig) -> Self {
        let style = if config.annotate { Style::Ansi } else { Style::Plain };
        Self {
            editor,
            session: Session::new(config.parsers).with_style(style),
            show_banner: config.show_banner,
            prompt: config.prompt.clone(),
        }
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the session mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);
            match self.eval(&line) {
                Ok(Reply::Output(text)) => println!("{text}"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Evaluates one line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, missing arguments, or failed
    /// file access.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if !line.starts_with(':') {
            let action = CreatureAction::new("", line);
            return Ok(Reply::Output(self.session.inspect_action(action)));
        }
        let (command, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, a)| (c, a.trim()));
        log::debug!("command {command} ({} bytes of argument)", argument.len());

        let output = match command {
            ":action" => {
                let (name, description) = named(argument)?;
                self.session.inspect_action(CreatureAction::new(name, description))
            }
            ":feature" => {
                let (name, description) = named(argument)?;
                self.session.inspect_feature(CreatureFeature::new(name, description))
            }
            ":spell" => self.session.inspect_spell(required(command, argument)?),
            ":type" => self.session.inspect_type(required(command, argument)?),
            ":dice" => self.session.inspect_dice(required(command, argument)?),
            ":reparse" => self.session.reparse(),
            ":save" => {
                let path = required(command, argument)?;
                let count = self
                    .session
                    .save(Path::new(path))
                    .map_err(|e| with_command(e, command))?;
                format!("saved {count} entities to {path}")
            }
            ":load" => {
                let path = required(command, argument)?;
                let count = self
                    .session
                    .load(Path::new(path))
                    .map_err(|e| with_command(e, command))?;
                format!("loaded {count} entities from {path}")
            }
            ":clear" => {
                self.session.clear();
                return Ok(Reply::Silent);
            }
            ":help" => help(),
            ":quit" | ":q" => return Ok(Reply::Quit),
            other => return Err(Error::unknown_command(other)),
        };
        Ok(Reply::Output(output))
    }
}

fn required<'a>(command: &str, argument: &'a str) -> Result<&'a str> {
    if argument.is_empty() {
        Err(Error::invalid_argument(format!("{command} needs an argument")))
    } else {
        Ok(argument)
    }
}

/// Splits `name | description`. Without a `|` the whole argument is the
/// description.
fn named(argument: &str) -> Result<(&str, &str)> {
    let (name, description) = argument
        .split_once('|')
        .map_or(("", argument), |(n, d)| (n.trim(), d.trim()));
    if description.is_empty() {
        return Err(Error::invalid_argument("expected <name> | <description>"));
    }
    Ok((name, description))
}

fn with_command(error: Error, command: &str) -> Error {
    let context = error
        .context
        .clone()
        .unwrap_or_default()
        .with_note(format!("while running {command}"));
    error.with_context(context)
}

fn help() -> String {
    COMMANDS
        .iter()
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_banner() {
    println!("Bestiary parse inspector");
    println!("Type :help for commands, Ctrl+D to exit.\n");
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31merror:\x1b[0m {error}");
    if let Some(context) = &error.context {
        eprintln!("{context}");
    }
}
