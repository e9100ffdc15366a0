//! Output sinks for the formatter.
//!
//! [`FormatContext`](crate::FormatContext) decides when to indent; an
//! [`Emitter`] only knows how to write text, line breaks and indentation.

/// Where formatted text goes.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    /// Line breaks are always `\n`.
    fn emit_newline(&mut self);

    /// Indentation for `level` nesting levels, [`INDENT_WIDTH`](crate::INDENT_WIDTH)
    /// spaces each.
    fn emit_indent(&mut self, level: usize);
}

/// Collects output in a `String`.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        self.buffer.push_str(&" ".repeat(level * crate::INDENT_WIDTH));
    }
}
