//! The `check` command: parse a file and report syntax errors.

use moon_diagnostic::emitter::ColorMode;

use super::{parse_reporting, read_file, Status};

pub fn check_file(path: &str, color: ColorMode) -> Status {
    let Some(source) = read_file(path) else {
        return Status::Failure;
    };
    match parse_reporting(path, &source, color) {
        Some(block) => {
            tracing::info!(path, statements = block.len(), "no syntax errors");
            Status::Success
        }
        None => Status::Failure,
    }
}
