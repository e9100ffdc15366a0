//! Moon command-line front end.
//!
//! Parses, checks and formats Moon source files, rendering syntax errors
//! with source context.
//!
//! # Debugging
//!
//! Set `MOON_LOG` (or `RUST_LOG`) to an `EnvFilter` directive to see the
//! parser's trace, e.g. `MOON_LOG=moon_parse=trace moonc check main.moon`.

pub mod args;
pub mod commands;
mod logging;

pub use args::{Args, Command, FmtMode, UsageError};
pub use commands::Status;
pub use logging::init_tracing;
