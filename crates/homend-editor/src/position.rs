//! Cursor positions inside a document.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is
//! the first character. Columns count Unicode scalar values (chars), matching
//! how `ropey` indexes lines.
//!
//! Navigation targets (line start, window start, document end, a cycle's
//! origin) are all plain `Position`s, so "the target coincides with the
//! cursor" is a simple equality check.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a document: (line, column), both 0-indexed.
///
/// `col` is a char offset from the start of the line. On the line `"café\n"`
/// column 4 is the position after `'é'`, which is where line-end navigation
/// lands when the cursor may sit past the last character.
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Line 0, column 0 — the start of every document.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The first column of `line`.
    #[inline]
    #[must_use]
    pub const fn line_start(line: usize) -> Self {
        Self { line, col: 0 }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed, the way a status line shows it.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
