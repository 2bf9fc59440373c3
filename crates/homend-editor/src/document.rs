//! Document — one open buffer with its cursor, window, and history.
//!
//! A `Document` is the host the navigator drives. It answers boundary
//! queries (line, window, document), moves the cursor, records marks, runs
//! the percentage jumps, and remembers which command ran last so repeated
//! presses can be told apart from fresh ones.
//!
//! Every cursor move goes through [`move_cursor_to`](Document::move_cursor_to)
//! or a motion that ends by re-establishing window visibility, so the window
//! always shows the cursor between commands.

use std::fmt;

use tracing::trace;

use crate::buffer::Buffer;
use crate::command::{CommandId, Motion};
use crate::cursor::{Cursor, max_col_for_line};
use crate::mark::MarkRing;
use crate::options::Options;
use crate::position::Position;
use crate::window::Window;

/// Largest percentage decile: `10` means the whole way.
pub const MAX_DECILE: u8 = 10;

/// Identity of an open document.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Doc#{}", self.0)
    }
}

/// An open buffer plus everything that moves over it.
#[derive(Debug)]
pub struct Document {
    id: DocumentId,
    buffer: Buffer,
    cursor: Cursor,
    window: Window,
    marks: MarkRing,
    options: Options,

    /// The command executed before the one currently running.
    last_command: Option<CommandId>,
}

impl Document {
    /// Open `buffer` in a window `height` rows tall, cursor at the start.
    #[must_use]
    pub fn new(id: DocumentId, buffer: Buffer, height: usize) -> Self {
        let options = Options::default();
        Self {
            id,
            buffer,
            cursor: Cursor::new(),
            window: Window::new(height),
            marks: MarkRing::with_capacity(options.mark_ring),
            options,
            last_command: None,
        }
    }

    // -- Accessors ----------------------------------------------------------

    #[must_use]
    pub const fn id(&self) -> DocumentId {
        self.id
    }

    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor.position()
    }

    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub const fn marks(&self) -> &MarkRing {
        &self.marks
    }

    #[must_use]
    pub const fn options(&self) -> Options {
        self.options
    }

    /// The command that ran before the current one.
    #[must_use]
    pub const fn last_command(&self) -> Option<CommandId> {
        self.last_command
    }

    // -- Configuration ------------------------------------------------------

    /// Replace the options and bring cursor, window and marks in line.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.window.set_scrolloff(options.scrolloff);
        self.marks.set_capacity(options.mark_ring);
        let pos = self.cursor.position();
        self.move_cursor_to(pos);
    }

    /// Set the first visible line without moving the cursor. The cursor is
    /// pulled into the window if it would fall outside.
    pub fn set_top_line(&mut self, line: usize) {
        self.window.set_top_line(line, &self.buffer);
        self.keep_cursor_in_window();
    }

    /// Record the command that just finished. The dispatcher calls this after
    /// every command, whether it succeeded or not.
    pub const fn finish_command(&mut self, id: CommandId) {
        self.last_command = Some(id);
    }

    // -- Boundary queries ---------------------------------------------------

    /// First column of the cursor's line.
    #[must_use]
    pub const fn line_start(&self) -> Position {
        Position::line_start(self.cursor.line())
    }

    /// Last column of the cursor's line.
    #[must_use]
    pub fn line_end(&self) -> Position {
        self.line_end_of(self.cursor.line())
    }

    /// Last column of `line`, honouring the `pastend` option.
    #[must_use]
    pub fn line_end_of(&self, line: usize) -> Position {
        let line = line.min(self.buffer.last_line());
        Position::new(line, max_col_for_line(&self.buffer, line, self.options.past_end))
    }

    #[must_use]
    pub const fn document_start(&self) -> Position {
        Position::ZERO
    }

    #[must_use]
    pub fn document_end(&self) -> Position {
        self.line_end_of(self.buffer.last_line())
    }

    /// Start of the top visible line.
    #[must_use]
    pub const fn window_start(&self) -> Position {
        Position::line_start(self.window.top_line())
    }

    /// The window's end boundary: the start of the first line below the
    /// window, or the document end when the window reaches it.
    #[must_use]
    pub fn window_end(&self) -> Position {
        if self.window.shows_last_line(&self.buffer) {
            self.document_end()
        } else {
            Position::line_start(self.window.top_line() + self.window.height())
        }
    }

    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.cursor() == self.line_start()
    }

    #[must_use]
    pub fn at_line_end(&self) -> bool {
        self.cursor() == self.line_end()
    }

    #[must_use]
    pub fn at_document_start(&self) -> bool {
        self.cursor() == self.document_start()
    }

    #[must_use]
    pub fn at_document_end(&self) -> bool {
        self.cursor() == self.document_end()
    }

    // -- Cursor mutation ----------------------------------------------------

    /// Put the cursor at `pos` (clamped) and scroll it into view.
    pub fn move_cursor_to(&mut self, pos: Position) {
        self.cursor
            .set_position(pos, &self.buffer, self.options.past_end);
        self.window
            .ensure_line_visible(self.cursor.line(), &self.buffer);
    }

    /// Run a host motion.
    pub fn run_motion(&mut self, motion: Motion) {
        let pe = self.options.past_end;
        match motion {
            Motion::Left(n) => self.cursor.move_left(n, &self.buffer, pe),
            Motion::Right(n) => self.cursor.move_right(n, &self.buffer, pe),
            Motion::Up(n) => self.cursor.move_up(n, &self.buffer, pe),
            Motion::Down(n) => self.cursor.move_down(n, &self.buffer, pe),
            Motion::ScrollUp(n) => {
                self.window.scroll_up(n);
                self.keep_cursor_in_window();
                return;
            }
            Motion::ScrollDown(n) => {
                self.window.scroll_down(n, &self.buffer);
                self.keep_cursor_in_window();
                return;
            }
            Motion::PopMark => {
                self.pop_mark();
                return;
            }
            Motion::Goto(pos) => {
                self.move_cursor_to(pos);
                return;
            }
        }
        self.window
            .ensure_line_visible(self.cursor.line(), &self.buffer);
    }

    /// After the window moved on its own, drag the cursor back on screen.
    fn keep_cursor_in_window(&mut self) {
        let pe = self.options.past_end;
        let top = self.window.top_line();
        let bottom = self.window.bottom_line(&self.buffer);
        let line = self.cursor.line();
        if line < top {
            self.cursor.move_down(top - line, &self.buffer, pe);
        } else if line > bottom {
            self.cursor.move_up(line - bottom, &self.buffer, pe);
        }
    }

    // -- History ------------------------------------------------------------

    /// Record `pos` on the mark ring.
    pub fn push_mark(&mut self, pos: Position) {
        self.marks.push(pos);
    }

    /// Jump back to the newest mark. Returns where the cursor went.
    pub fn pop_mark(&mut self) -> Option<Position> {
        let here = self.cursor();
        let target = self.marks.pop(here)?;
        trace!(from = ?here, to = ?target, "pop mark");
        self.move_cursor_to(target);
        Some(self.cursor())
    }

    // -- Percentage jumps ---------------------------------------------------

    /// Jump `n` tenths of the way into the document (start of that line).
    /// Records the pre-jump position as a mark.
    pub fn jump_to_percent_from_start(&mut self, n: u8) {
        let line = self.decile_line(n);
        trace!(n, line, "percent jump from start");
        self.push_mark(self.cursor());
        self.move_cursor_to(Position::line_start(line));
    }

    /// Jump `n` tenths of the way back from the end of the document.
    /// Records the pre-jump position as a mark.
    pub fn jump_to_percent_from_end(&mut self, n: u8) {
        let line = self.buffer.last_line() - self.decile_line(n);
        trace!(n, line, "percent jump from end");
        self.push_mark(self.cursor());
        self.move_cursor_to(Position::line_start(line));
    }

    /// `last_line * n / 10`, with `n` capped at [`MAX_DECILE`].
    fn decile_line(&self, n: u8) -> usize {
        let n = usize::from(n.min(MAX_DECILE));
        self.buffer.last_line() * n / usize::from(MAX_DECILE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
