//! Bestiary CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use bestiary_runtime::{Repl, RuntimeConfig, reparse_file};

/// What to do after parsing arguments.
enum Mode {
    Repl,
    Reparse { input: PathBuf, output: PathBuf },
}

/// CLI configuration parsed from arguments.
struct CliConfig {
    runtime: RuntimeConfig,
    mode: Mode,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig {
        runtime: RuntimeConfig::default(),
        mode: Mode::Repl,
        show_help: false,
        show_version: false,
    };
    let mut positional = Vec::new();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.runtime = config.runtime.verbose(),
            "--no-banner" => config.runtime = config.runtime.without_banner(),
            "--plain" => config.runtime = config.runtime.with_annotations(false),
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            _ => positional.push(arg),
        }
    }

    match positional.as_slice() {
        [] => {}
        [command, input] if command == "reparse" => {
            config.mode = Mode::Reparse {
                input: PathBuf::from(input),
                output: PathBuf::from(input),
            };
        }
        [command, input, output] if command == "reparse" => {
            config.mode = Mode::Reparse {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            };
        }
        [command, ..] if command == "reparse" => {
            return Err("usage: bestiary reparse <input> [<output>]".into());
        }
        [other, ..] => return Err(format!("unknown command: {other}").into()),
    }

    Ok(config)
}

fn init_logging(runtime: &RuntimeConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if runtime.verbose {
        builder.filter_level(runtime.log_level());
    }
    builder.format_timestamp_secs().init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("bestiary {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&config.runtime);

    match config.mode {
        Mode::Repl => {
            let mut repl = Repl::new(&config.runtime)?;
            repl.run()?;
        }
        Mode::Reparse { input, output } => {
            let report = reparse_file(&input, &output, config.runtime.parsers)?;
            println!(
                "{}: {} of {} entities changed",
                input.display(),
                report.changed.len(),
                report.visited
            );
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mbestiary\x1b[0m - parse inspector for 5e stat block text

\x1b[1mUSAGE:\x1b[0m
    bestiary [OPTIONS]                           Start the inspector REPL
    bestiary [OPTIONS] reparse <in> [<out>]      Bring cached parses in a file up to date

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -v, --verbose    Log at debug level
    --no-banner      Skip the welcome banner
    --plain          Bracket annotations instead of coloring them

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG         Log filter, e.g. bestiary_visitor=trace

\x1b[1mREPL:\x1b[0m
    Type :help at the prompt for commands."
    );
}
