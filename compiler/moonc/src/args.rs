//! Command-line argument parsing.
//!
//! `moonc <command> [operand] [--color=auto|always|never] [flags]`. Flags
//! may appear anywhere after the program name.

use moon_diagnostic::emitter::ColorMode;
use thiserror::Error;

/// What `fmt` does with the formatted text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FmtMode {
    /// Write it to stdout.
    #[default]
    Print,
    /// Write nothing; fail if the file is not already formatted.
    Check,
    /// Overwrite the file.
    Write,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Parse and dump the tree.
    Parse { path: String },
    /// Lex and dump the tokens.
    Lex { path: String },
    /// Parse and report errors only.
    Check { path: String },
    Fmt { path: String, mode: FmtMode },
    /// Describe an error code.
    Explain { code: String },
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub color: ColorMode,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    MissingCommand,

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` needs {what}")]
    MissingOperand {
        command: &'static str,
        what: &'static str,
    },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, UsageError> {
        let mut color = ColorMode::default();
        let mut fmt_mode = FmtMode::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::from_flag(value)
                    .ok_or_else(|| UsageError::InvalidColor(value.to_string()))?;
            } else if arg == "--check" {
                fmt_mode = FmtMode::Check;
            } else if arg == "--write" || arg == "-w" {
                fmt_mode = FmtMode::Write;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let name = positional.next().ok_or(UsageError::MissingCommand)?;
        let mut operand = |command: &'static str, what: &'static str| {
            positional
                .next()
                .ok_or(UsageError::MissingOperand { command, what })
        };

        let command = match name.as_str() {
            "parse" => Command::Parse {
                path: operand("parse", "a file path")?,
            },
            "lex" => Command::Lex {
                path: operand("lex", "a file path")?,
            },
            "check" => Command::Check {
                path: operand("check", "a file path")?,
            },
            "fmt" => Command::Fmt {
                path: operand("fmt", "a file path")?,
                mode: fmt_mode,
            },
            "explain" | "--explain" => Command::Explain {
                code: operand("explain", "an error code")?,
            },
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-V" => Command::Version,
            _ => return Err(UsageError::UnknownCommand(name)),
        };

        if let Some(extra) = positional.next() {
            return Err(UsageError::UnexpectedArgument(extra));
        }

        Ok(Args { command, color })
    }
}

pub fn print_usage() {
    println!("Moon front end");
    println!();
    println!("Usage: moonc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.moon>    Parse a file and report syntax errors");
    println!("  fmt <file.moon>      Format a file");
    println!("  parse <file.moon>    Parse and display the syntax tree");
    println!("  lex <file.moon>      Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E1006)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Color diagnostics: auto (default), always, never");
    println!();
    println!("Format options:");
    println!("  --check              Exit 1 if the file is not formatted");
    println!("  --write, -w          Format the file in place");
    println!();
    println!("Environment:");
    println!("  MOON_LOG             Tracing filter (falls back to RUST_LOG)");
}
