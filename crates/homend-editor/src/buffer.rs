//! Text buffer — read-only text storage for navigation.
//!
//! A `Buffer` wraps a [`ropey::Rope`] and answers the questions navigation
//! needs: how many lines there are, how long each line's content is, and
//! where the document ends.
//!
//! # Design choices
//!
//! - **ropey** gives O(log n) line indexing and Unicode-aware line breaks, so
//!   boundary queries stay cheap even on very large files.
//!
//! - **Columns are char offsets**, not byte offsets. Byte offsets never leak
//!   into the public API.
//!
//! - **No editing.** The navigation host only moves a cursor over the text;
//!   insert/delete and undo are not part of this crate.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use ropey::{Rope, RopeSlice};

use crate::position::Position;

/// A text buffer backed by a rope.
///
/// # Coordinate system
///
/// All positions are 0-indexed `(line, col)` pairs. An empty buffer still has
/// one (empty) line, and a buffer ending in `\n` has a trailing empty line —
/// this matches how editors display files.
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    // -- Text access --------------------------------------------------------

    /// Total number of lines. Never zero.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Index of the last line.
    #[inline]
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get a line including its trailing line ending. `None` past the end.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line < self.rope.len_lines() {
            Some(self.rope.line(line))
        } else {
            None
        }
    }

    /// Number of chars in a line **excluding** any trailing line ending
    /// (`\n`, `\r\n`, `\r`).
    ///
    /// Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|rope_line| {
            let total = rope_line.len_chars();
            if total == 0 {
                return 0;
            }
            match rope_line.char(total - 1) {
                '\n' if total >= 2 && rope_line.char(total - 2) == '\r' => total - 2,
                '\n' | '\r' => total - 1,
                _ => total,
            }
        })
    }

    /// Clamp a position to the nearest position that exists in the buffer.
    ///
    /// The column may equal the line's content length (the slot after the
    /// last character).
    #[must_use]
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        let max_col = self.line_content_len(line).unwrap_or(0);
        Position::new(line, pos.col.min(max_col))
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
