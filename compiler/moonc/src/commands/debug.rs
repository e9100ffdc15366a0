//! Debug commands: dump tokens or the syntax tree.

use moon_diagnostic::emitter::ColorMode;
use moon_parse::ParseError;

use super::{parse_reporting, read_file, report_to_stderr, Status};

/// Print one token per line.
pub fn lex_file(path: &str, color: ColorMode) -> Status {
    let Some(source) = read_file(path) else {
        return Status::Failure;
    };
    match moon_lexer::lex(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token:?}");
            }
            Status::Success
        }
        Err(err) => {
            report_to_stderr(path, &source, color, &ParseError::from(err));
            Status::Failure
        }
    }
}

/// Pretty-print the parsed tree with positions.
pub fn parse_file(path: &str, color: ColorMode) -> Status {
    let Some(source) = read_file(path) else {
        return Status::Failure;
    };
    match parse_reporting(path, &source, color) {
        Some(block) => {
            println!("{block:#?}");
            Status::Success
        }
        None => Status::Failure,
    }
}
