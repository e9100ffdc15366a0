//! The `explain` command: describe an error code.

use moon_diagnostic::{ErrorCode, UnknownErrorCode};

use super::Status;

/// The line `explain` prints for `code`.
pub fn explanation(code: &str) -> Result<String, UnknownErrorCode> {
    let code: ErrorCode = code.parse()?;
    Ok(format!("{code}: {}", code.summary()))
}

pub fn explain_error(code: &str) -> Status {
    match explanation(code) {
        Ok(text) => {
            println!("{text}");
            Status::Success
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("Codes have the format EXXXX where X is a digit, e.g. E1006.");
            Status::Failure
        }
    }
}
