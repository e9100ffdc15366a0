//! The `fmt` command: print, check or rewrite a file in canonical layout.
//!
//! The layout is rebuilt from the syntax tree, which keeps no comments, so
//! a source with comments is refused in every mode.

use moon_diagnostic::emitter::ColorMode;
use moon_ir::Position;
use moon_parse::ParseError;
use thiserror::Error;

use super::{read_file, report_to_stderr, Status};
use crate::args::FmtMode;

/// Why a source could not be formatted.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("formatting would delete {count} comment(s), the first at {first}")]
    HasComments { count: usize, first: Position },
}

/// Canonical text for `source`.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    let tokens = moon_lexer::lex(source).map_err(ParseError::from)?;
    if let Some(&first) = tokens.comments().first() {
        return Err(FormatError::HasComments {
            count: tokens.comments().len(),
            first,
        });
    }
    let block = moon_parse::parse_tokens(&tokens)?;
    Ok(moon_fmt::format_block(&block))
}

pub fn run_format(path: &str, mode: FmtMode, color: ColorMode) -> Status {
    let Some(source) = read_file(path) else {
        return Status::Failure;
    };
    let formatted = match format_source(&source) {
        Ok(formatted) => formatted,
        Err(FormatError::Parse(err)) => {
            tracing::debug!(%err, path, "parse failed");
            report_to_stderr(path, &source, color, &err);
            return Status::Failure;
        }
        Err(err @ FormatError::HasComments { .. }) => {
            eprintln!("error: cannot format `{path}`: {err}");
            return Status::Failure;
        }
    };

    match mode {
        FmtMode::Print => {
            print!("{formatted}");
            Status::Success
        }
        FmtMode::Check => {
            if formatted == source {
                Status::Success
            } else {
                eprintln!("{path}: not formatted");
                Status::Failure
            }
        }
        FmtMode::Write => {
            if formatted == source {
                tracing::debug!(path, "already formatted");
                return Status::Success;
            }
            match std::fs::write(path, &formatted) {
                Ok(()) => {
                    tracing::info!(path, "formatted");
                    Status::Success
                }
                Err(err) => {
                    eprintln!("error: cannot write `{path}`: {err}");
                    Status::Failure
                }
            }
        }
    }
}
