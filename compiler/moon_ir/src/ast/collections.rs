//! Table Constructor Types
//!
//! Entries are an ordered list of (optional key, value) pairs. Keys are
//! expressions, not resolved values: `{[1] = a, [1] = b}` keeps both entries.

use super::expr::Expr;

/// Table constructor: `{ entries }`.
#[derive(PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConstructor {
    pub entries: Vec<TableEntry>,
}

impl TableConstructor {
    pub fn new(entries: Vec<TableEntry>) -> Self {
        TableConstructor { entries }
    }

    /// Entries in source order, with positional ones numbered.
    ///
    /// Key-less entries receive indices 1, 2, 3... in encounter order; keyed
    /// entries do not advance the counter. `{1, 2, x = 3, 4}` yields
    /// positional slots 1, 2, 3 holding `1`, `2`, `4` and a keyed slot `x`.
    pub fn slots(&self) -> impl Iterator<Item = TableSlot<'_>> {
        let mut next_index = 0;
        self.entries.iter().map(move |entry| match &entry.key {
            Some(key) => TableSlot::Keyed {
                key,
                value: &entry.value,
            },
            None => {
                next_index += 1;
                TableSlot::Positional {
                    index: next_index,
                    value: &entry.value,
                }
            }
        })
    }

    /// Number of key-less entries.
    pub fn positional_count(&self) -> usize {
        self.entries.iter().filter(|e| e.key.is_none()).count()
    }
}

/// One `[key] = value`, `name = value` or bare `value` entry.
#[derive(PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEntry {
    /// `None` for a positional (array-style) entry.
    pub key: Option<Expr>,
    pub value: Expr,
}

impl TableEntry {
    pub fn positional(value: Expr) -> Self {
        TableEntry { key: None, value }
    }

    pub fn keyed(key: Expr, value: Expr) -> Self {
        TableEntry {
            key: Some(key),
            value,
        }
    }
}

/// A table entry as seen by a consumer building the table.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TableSlot<'a> {
    /// Array-style entry stored at `index` (1-based).
    Positional { index: usize, value: &'a Expr },
    /// Entry with an explicit key expression.
    Keyed { key: &'a Expr, value: &'a Expr },
}
