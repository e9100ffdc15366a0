//! Formatting Context
//!
//! Tracks the indentation level and whether the emitter sits at the start of
//! a line. Indentation is written lazily, on the first text of each line, so
//! blank lines carry no trailing spaces.

use crate::emitter::Emitter;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Emitter wrapper with indentation state.
pub struct FormatContext<E: Emitter> {
    emitter: E,
    indent_level: usize,
    at_line_start: bool,
}

impl<E: Emitter> FormatContext<E> {
    pub fn new(emitter: E) -> Self {
        FormatContext {
            emitter,
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Emit text, indenting first if this opens a line.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.emitter.emit_indent(self.indent_level);
            self.at_line_start = false;
        }
        self.emitter.emit(text);
    }

    pub fn emit_space(&mut self) {
        self.emit(" ");
    }

    pub fn emit_newline(&mut self) {
        self.emitter.emit_newline();
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Give back the emitter.
    pub fn finish(self) -> E {
        self.emitter
    }
}
