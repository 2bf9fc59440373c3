//! Cursor — a position with movement primitives.
//!
//! The `Cursor` tracks a position in a buffer and a sticky column for
//! vertical movement. It knows nothing about navigation cycles: the
//! home/end navigator drives it through [`set_position`](Cursor::set_position)
//! and the plain motions below are the "other commands" that interrupt a
//! cycle.
//!
//! # Column limit
//!
//! Movement methods take a `past_end: bool` parameter:
//!
//! - `past_end = true`: the cursor can sit after the last char of a line
//!   (non-modal editing; line end is `content_len`).
//! - `past_end = false`: the cursor sits ON a character (line end is
//!   `content_len - 1`, or 0 on an empty line).
//!
//! # Sticky column
//!
//! When moving vertically, the cursor remembers the column it was at. Passing
//! through a short line and reaching a long line again snaps back to the
//! remembered column. Horizontal movement and direct positioning reset it.

use crate::buffer::Buffer;
use crate::position::Position;

/// A cursor in a text buffer.
///
/// Lightweight value type. Does not own or reference the buffer; the buffer
/// is passed to movement methods as a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,

    /// Remembered column for vertical movement.
    sticky_col: usize,
}

impl Cursor {
    /// Create a cursor at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos: Position::ZERO,
            sticky_col: 0,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.pos.line
    }

    // -- Direct positioning -------------------------------------------------

    /// Move the cursor to an exact position, clamped to buffer bounds.
    /// Resets the sticky column.
    pub fn set_position(&mut self, pos: Position, buf: &Buffer, past_end: bool) {
        self.pos = clamp(pos, buf, past_end);
        self.sticky_col = self.pos.col;
    }

    // -- Horizontal movement ------------------------------------------------

    /// Move left by `count` characters. Stops at column 0 (no line wrapping).
    pub fn move_left(&mut self, count: usize, buf: &Buffer, past_end: bool) {
        let col = self.pos.col.min(max_col_for_line(buf, self.pos.line, past_end));
        self.pos.col = col.saturating_sub(count);
        self.sticky_col = self.pos.col;
    }

    /// Move right by `count` characters. Stops at the column limit for the
    /// current line (no line wrapping).
    pub fn move_right(&mut self, count: usize, buf: &Buffer, past_end: bool) {
        let max_col = max_col_for_line(buf, self.pos.line, past_end);
        self.pos.col = (self.pos.col + count).min(max_col);
        self.sticky_col = self.pos.col;
    }

    // -- Vertical movement --------------------------------------------------

    /// Move up by `count` lines, aiming for the sticky column.
    pub fn move_up(&mut self, count: usize, buf: &Buffer, past_end: bool) {
        self.pos.line = self.pos.line.saturating_sub(count);
        self.pos.col = self
            .sticky_col
            .min(max_col_for_line(buf, self.pos.line, past_end));
    }

    /// Move down by `count` lines, aiming for the sticky column.
    pub fn move_down(&mut self, count: usize, buf: &Buffer, past_end: bool) {
        self.pos.line = (self.pos.line + count).min(buf.last_line());
        self.pos.col = self
            .sticky_col
            .min(max_col_for_line(buf, self.pos.line, past_end));
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Maximum valid column for a given line and column limit.
///
/// - `past_end = false`: `content_len - 1` (or 0 for empty lines).
/// - `past_end = true`: `content_len`.
#[must_use]
pub fn max_col_for_line(buf: &Buffer, line: usize, past_end: bool) -> usize {
    let content_len = buf.line_content_len(line).unwrap_or(0);
    if past_end {
        content_len
    } else {
        content_len.saturating_sub(1)
    }
}

/// Clamp a position to valid buffer bounds, then to the column limit.
fn clamp(pos: Position, buf: &Buffer, past_end: bool) -> Position {
    let pos = buf.clamp_position(pos);
    Position::new(pos.line, pos.col.min(max_col_for_line(buf, pos.line, past_end)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // 5 lines of varying length:
    // "hello\n"   (5)
    // "world\n"   (5)
    // "hi\n"      (2)
    // "\n"        (0)
    // "goodbye"   (7, no trailing newline)
    fn sample_buffer() -> Buffer {
        Buffer::from_text("hello\nworld\nhi\n\ngoodbye")
    }

    fn cursor_at(pos: Position, buf: &Buffer) -> Cursor {
        let mut c = Cursor::new();
        c.set_position(pos, buf, true);
        c
    }

    // -- set_position -------------------------------------------------------

    #[test]
    fn new_at_origin() {
        assert_eq!(Cursor::new().position(), Position::ZERO);
    }

    #[test]
    fn set_position_clamps_normal() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        c.set_position(Position::new(100, 100), &buf, false);
        assert_eq!(c.position(), Position::new(4, 6));
    }

    #[test]
    fn set_position_clamps_past_end() {
        let buf = sample_buffer();
        let mut c = Cursor::new();
        c.set_position(Position::new(0, 100), &buf, true);
        assert_eq!(c.position(), Position::new(0, 5));
    }

    #[test]
    fn set_position_resets_sticky_col() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(0, 4), &buf);
        c.move_down(2, &buf, true);
        c.set_position(Position::new(2, 1), &buf, true);
        c.move_up(2, &buf, true);
        assert_eq!(c.position(), Position::new(0, 1));
    }

    // -- Horizontal ---------------------------------------------------------

    #[test]
    fn move_left_stops_at_zero() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(0, 2), &buf);
        c.move_left(10, &buf, true);
        assert_eq!(c.position(), Position::new(0, 0));
    }

    #[test]
    fn move_right_stops_at_limit() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(2, 0), &buf);
        c.move_right(10, &buf, true);
        assert_eq!(c.position(), Position::new(2, 2));
        c.move_right(10, &buf, false);
        assert_eq!(c.position(), Position::new(2, 1));
    }

    #[test]
    fn move_left_from_past_end_without_pastend() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(0, 5), &buf);
        c.move_left(1, &buf, false);
        assert_eq!(c.position(), Position::new(0, 3));
    }

    // -- Vertical -----------------------------------------------------------

    #[test]
    fn sticky_col_survives_short_lines() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(0, 4), &buf);
        c.move_down(2, &buf, true); // "hi"
        assert_eq!(c.position(), Position::new(2, 2));
        c.move_down(1, &buf, true); // ""
        assert_eq!(c.position(), Position::new(3, 0));
        c.move_down(1, &buf, true); // "goodbye"
        assert_eq!(c.position(), Position::new(4, 4));
    }

    #[test]
    fn vertical_moves_clamp_to_buffer() {
        let buf = sample_buffer();
        let mut c = cursor_at(Position::new(1, 1), &buf);
        c.move_up(50, &buf, true);
        assert_eq!(c.line(), 0);
        c.move_down(50, &buf, true);
        assert_eq!(c.line(), 4);
    }

    // -- Helpers ------------------------------------------------------------

    #[test]
    fn max_col_depends_on_limit() {
        let buf = sample_buffer();
        assert_eq!(max_col_for_line(&buf, 0, true), 5);
        assert_eq!(max_col_for_line(&buf, 0, false), 4);
        assert_eq!(max_col_for_line(&buf, 3, false), 0);
        assert_eq!(max_col_for_line(&buf, 99, true), 0);
    }
}
