//! Window — the visible slice of a document.
//!
//! A `Window` tracks which buffer lines are on screen: a `top_line` and a
//! `height` in rows. Navigation uses it for the middle stages of a cycle
//! ("top of the window", "bottom of the window"); motions use it to keep the
//! cursor in view.
//!
//! ```text
//!  buffer            window (top_line = 100, height = 40)
//!  ┌──────────┐
//!  │ line 99  │
//!  ├──────────┤ ◀── visible start (100, 0)
//!  │ line 100 │
//!  │   ...    │
//!  │ line 139 │ ◀── bottom line
//!  ├──────────┤ ◀── end boundary: start of line 140
//!  │ line 140 │
//!  └──────────┘
//! ```
//!
//! The window holds only scroll state. It doesn't own the buffer or cursor;
//! those are passed in as parameters.

use crate::buffer::Buffer;

/// Scroll state of a window onto a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// First visible buffer line (0-indexed).
    top_line: usize,

    /// Number of text rows. Always at least 1.
    height: usize,

    /// Context lines kept above/below the cursor when the window has to
    /// scroll to follow it.
    scrolloff: usize,
}

impl Window {
    /// Create a window showing `height` rows from the top of the buffer.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            top_line: 0,
            height: height.max(1),
            scrolloff: 0,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn top_line(&self) -> usize {
        self.top_line
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The last buffer line shown in the window.
    #[must_use]
    pub fn bottom_line(&self, buf: &Buffer) -> usize {
        (self.top_line + self.height)
            .min(buf.line_count())
            .saturating_sub(1)
            .max(self.top_line.min(buf.last_line()))
    }

    /// True when the window reaches down to the last line of the buffer.
    #[must_use]
    pub fn shows_last_line(&self, buf: &Buffer) -> bool {
        self.top_line + self.height >= buf.line_count()
    }

    /// True when `line` is on screen.
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.height
    }

    // -- Configuration ------------------------------------------------------

    /// Set the vertical scroll position, clamped to the last buffer line.
    pub fn set_top_line(&mut self, line: usize, buf: &Buffer) {
        self.top_line = line.min(buf.last_line());
    }

    pub const fn set_scrolloff(&mut self, lines: usize) {
        self.scrolloff = lines;
    }

    /// Scrolloff capped so that both margins fit in the window.
    const fn effective_scrolloff(&self) -> usize {
        let half = (self.height - 1) / 2;
        if self.scrolloff < half {
            self.scrolloff
        } else {
            half
        }
    }

    // -- Scrolling ----------------------------------------------------------

    /// Scroll so that `line` is visible.
    ///
    /// Lines already on screen never scroll the window. When scrolling is
    /// needed, the window moves just far enough to show `line` with
    /// `scrolloff` lines of context on the side it scrolled toward.
    pub fn ensure_line_visible(&mut self, line: usize, buf: &Buffer) {
        if self.contains_line(line) {
            return;
        }
        let so = self.effective_scrolloff();
        if line < self.top_line {
            self.top_line = line.saturating_sub(so);
        } else {
            let wanted_bottom = (line + so).min(buf.last_line());
            self.top_line = (wanted_bottom + 1).saturating_sub(self.height);
        }
    }

    /// Scroll the window down by `count` lines, never past the last line.
    pub fn scroll_down(&mut self, count: usize, buf: &Buffer) {
        self.top_line = (self.top_line + count).min(buf.last_line());
    }

    /// Scroll the window up by `count` lines, stopping at the first line.
    pub const fn scroll_up(&mut self, count: usize) {
        self.top_line = self.top_line.saturating_sub(count);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
