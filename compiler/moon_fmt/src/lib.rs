//! Moon Formatter
//!
//! Prints a syntax tree back to source text.
//!
//! Output is one statement per line with 4-space indentation. Parentheses
//! are inserted only where the binding powers of the operators require them,
//! so parsing the output yields a tree that is structurally equal
//! ([`SyntaxEq`](moon_ir::SyntaxEq)) to the one printed, and formatting that
//! tree again gives the same text.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction
//! - [`context`]: Indentation tracking on top of an emitter
//! - [`formatter`]: Statement and expression rendering

pub mod context;
pub mod emitter;
pub mod formatter;

pub use context::{FormatContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::{format_block, format_expr, Formatter};
