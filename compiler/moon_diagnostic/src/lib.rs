//! Diagnostics for Moon tooling.
//!
//! Every problem the lexer, the parser or an evaluator reports becomes a
//! [`Diagnostic`]: a searchable [`ErrorCode`], a message, and one or more
//! [`Label`]s pinned to a source [`Position`](moon_ir::Position). Emitters in
//! [`emitter`] turn diagnostics into text.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
