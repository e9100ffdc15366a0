//! Source positions.
//!
//! A `Position` is the 1-based line/column of the token that began a
//! construct. Positions feed diagnostics only; nothing in the tree's
//! meaning depends on them.

use std::fmt;

/// Error when creating a position from a zero line or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// Lines are counted from 1.
    #[error("line numbers start at 1, got 0")]
    ZeroLine,
    /// Columns are counted from 1.
    #[error("column numbers start at 1, got 0 (line {line})")]
    ZeroColumn { line: u32 },
}

/// Source location of a node.
///
/// Layout: 8 bytes total
/// - line: u32 - 1-based line number
/// - column: u32 - 1-based column, counted in characters
///
/// Zero in both fields is reserved for [`Position::UNKNOWN`]; a real position
/// can never be zero, so the sentinel is never confused with line 1 column 1.
/// The fields are private: a position is fixed when the node is built.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Sentinel for synthesized nodes that have no source location.
    pub const UNKNOWN: Position = Position { line: 0, column: 0 };

    /// Create a position.
    ///
    /// # Panics
    /// Panics if `line` or `column` is zero.
    /// Use `try_new` for fallible construction.
    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self::try_new(line, column).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Try to create a position, rejecting zero lines and columns.
    #[inline]
    pub const fn try_new(line: u32, column: u32) -> Result<Self, PositionError> {
        if line == 0 {
            return Err(PositionError::ZeroLine);
        }
        if column == 0 {
            return Err(PositionError::ZeroColumn { line });
        }
        Ok(Position { line, column })
    }

    /// 1-based line, or 0 for `UNKNOWN`.
    #[inline]
    pub const fn line(self) -> u32 {
        self.line
    }

    /// 1-based column, or 0 for `UNKNOWN`.
    #[inline]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// Whether this is a real source location.
    #[inline]
    pub const fn is_known(self) -> bool {
        self.line != 0
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            f.write_str("?:?")
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            f.write_str("<unknown>")
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}
