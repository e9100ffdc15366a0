//! Command handlers for the Moon CLI.
//!
//! Each submodule implements one command. Shared helpers for reading
//! files and rendering syntax errors live here in the module root.

use std::io::{self, IsTerminal, Write};

use moon_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use moon_ir::Block;
use moon_parse::ParseError;

use crate::args::{print_usage, Args, Command};

mod check;
mod debug;
mod explain;
mod fmt;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::{explain_error, explanation};
pub use fmt::{format_source, run_format, FormatError};

/// Process outcome of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }
}

/// Dispatch a parsed command line.
pub fn run(args: &Args) -> Status {
    tracing::debug!(command = ?args.command, "running");
    match &args.command {
        Command::Check { path } => check_file(path, args.color),
        Command::Parse { path } => parse_file(path, args.color),
        Command::Lex { path } => lex_file(path, args.color),
        Command::Fmt { path, mode } => run_format(path, *mode, args.color),
        Command::Explain { code } => explain_error(code),
        Command::Help => {
            print_usage();
            Status::Success
        }
        Command::Version => {
            println!("moonc {}", env!("CARGO_PKG_VERSION"));
            Status::Success
        }
    }
}

/// Read a source file, reporting failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            None
        }
    }
}

/// Render a syntax error against its source, followed by the summary line.
pub fn report_parse_error<W: Write>(
    writer: W,
    color: ColorMode,
    is_tty: bool,
    path: &str,
    source: &str,
    err: &ParseError,
) {
    let mut emitter =
        TerminalEmitter::with_color_mode(writer, color, is_tty).with_source(path, source);
    emitter.emit(&err.to_diagnostic());
    emitter.emit_summary(1, 0);
    emitter.flush();
}

/// Render a syntax error on stderr.
pub(crate) fn report_to_stderr(path: &str, source: &str, color: ColorMode, err: &ParseError) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    report_parse_error(stderr, color, is_tty, path, source, err);
}

/// Parse `source`, reporting any error on stderr.
pub(crate) fn parse_reporting(path: &str, source: &str, color: ColorMode) -> Option<Block> {
    match moon_parse::parse(source) {
        Ok(block) => Some(block),
        Err(err) => {
            tracing::debug!(%err, path, "parse failed");
            report_to_stderr(path, source, color, &err);
            None
        }
    }
}
