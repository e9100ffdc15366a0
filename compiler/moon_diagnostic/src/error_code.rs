//! Error codes for all Moon diagnostics.
//!
//! The first digit names the phase that raised the problem.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error codes for all Moon diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors raised by evaluators
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// Unterminated long string
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Unterminated long comment
    E0006,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected name
    E1003,
    /// Assignment to something that is not a variable or table access
    E1004,
    /// Expression used as a statement
    E1005,
    /// `return` not at the end of its block
    E1006,
    /// Method call syntax (`a:b()`)
    E1007,
    /// `...` outside a variadic function
    E1008,

    // Runtime Errors (E2xxx)
    /// Error raised while running a tree
    E2001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E2001 => "E2001",
        }
    }

    /// One-line summary, as shown by `moonc explain`.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "malformed number literal",
            ErrorCode::E0004 => "unterminated long string",
            ErrorCode::E0005 => "invalid escape sequence",
            ErrorCode::E0006 => "unterminated long comment",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression",
            ErrorCode::E1003 => "expected a name",
            ErrorCode::E1004 => "cannot assign to this expression",
            ErrorCode::E1005 => "expression used as a statement",
            ErrorCode::E1006 => "`return` must be the last statement of a block",
            ErrorCode::E1007 => "method call syntax is not supported",
            ErrorCode::E1008 => "`...` used outside a variadic function",
            ErrorCode::E2001 => "runtime error",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a code that does not exist.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts `E1002` as well as `e1002`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
