//! Runtime configuration.

use bestiary_grammar::DomainParsers;

/// How the REPL and CLI behave.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Primary prompt.
    pub prompt: String,
    /// Whether to print the welcome banner.
    pub show_banner: bool,
    /// Whether to log at debug level.
    pub verbose: bool,
    /// Whether annotated spans are colored rather than bracketed.
    pub annotate: bool,
    /// The parsers to use.
    pub parsers: DomainParsers,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            prompt: "bestiary> ".to_string(),
            show_banner: true,
            verbose: false,
            annotate: true,
            parsers: DomainParsers::default(),
        }
    }
}

impl RuntimeConfig {
    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Turns on debug logging.
    #[must_use]
    pub const fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Turns annotated output on or off.
    #[must_use]
    pub const fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Uses `parsers` instead of the current ones.
    #[must_use]
    pub const fn with_parsers(mut self, parsers: DomainParsers) -> Self {
        self.parsers = parsers;
        self
    }

    /// The log level the binary installs.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
