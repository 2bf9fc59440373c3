//! The editor interface the navigator consumes.
//!
//! The navigator never reaches into buffers or windows directly. Everything
//! it needs comes through [`EditorHost`]. [`Document`] is the host shipped
//! with this workspace; tests use a recording fake.

use homend_editor::command::CommandId;
use homend_editor::document::{Document, DocumentId};
use homend_editor::position::Position;

/// Queries and mutations the navigator needs from the editor.
pub trait EditorHost {
    /// Identity of the document being navigated. Navigation state is kept
    /// per document.
    fn document_id(&self) -> DocumentId;

    /// The command executed before the current one, if any.
    fn last_command(&self) -> Option<CommandId>;

    fn cursor(&self) -> Position;

    // -- Position predicates ------------------------------------------------

    fn at_line_start(&self) -> bool;
    fn at_line_end(&self) -> bool;
    fn at_document_start(&self) -> bool;
    fn at_document_end(&self) -> bool;

    // -- Boundary queries ---------------------------------------------------

    /// Start of the cursor's line.
    fn line_start(&self) -> Position;
    /// End of the cursor's line.
    fn line_end(&self) -> Position;
    /// End of an arbitrary line.
    fn line_end_of(&self, line: usize) -> Position;
    /// Start of the top visible line.
    fn window_start(&self) -> Position;
    /// Start of the first line below the window, or the document end when
    /// the window shows it.
    fn window_end(&self) -> Position;
    fn document_start(&self) -> Position;
    fn document_end(&self) -> Position;

    // -- Mutation -----------------------------------------------------------

    fn move_cursor_to(&mut self, pos: Position);

    /// Record `pos` in the navigation history.
    fn push_mark(&mut self, pos: Position);

    /// Jump `n` tenths of the way into the document.
    fn jump_to_percent_from_start(&mut self, n: u8);

    /// Jump `n` tenths of the way back from the end of the document.
    fn jump_to_percent_from_end(&mut self, n: u8);
}

impl EditorHost for Document {
    fn document_id(&self) -> DocumentId {
        self.id()
    }

    fn last_command(&self) -> Option<CommandId> {
        Self::last_command(self)
    }

    fn cursor(&self) -> Position {
        Self::cursor(self)
    }

    fn at_line_start(&self) -> bool {
        Self::at_line_start(self)
    }

    fn at_line_end(&self) -> bool {
        Self::at_line_end(self)
    }

    fn at_document_start(&self) -> bool {
        Self::at_document_start(self)
    }

    fn at_document_end(&self) -> bool {
        Self::at_document_end(self)
    }

    fn line_start(&self) -> Position {
        Self::line_start(self)
    }

    fn line_end(&self) -> Position {
        Self::line_end(self)
    }

    fn line_end_of(&self, line: usize) -> Position {
        Self::line_end_of(self, line)
    }

    fn window_start(&self) -> Position {
        Self::window_start(self)
    }

    fn window_end(&self) -> Position {
        Self::window_end(self)
    }

    fn document_start(&self) -> Position {
        Self::document_start(self)
    }

    fn document_end(&self) -> Position {
        Self::document_end(self)
    }

    fn move_cursor_to(&mut self, pos: Position) {
        Self::move_cursor_to(self, pos);
    }

    fn push_mark(&mut self, pos: Position) {
        Self::push_mark(self, pos);
    }

    fn jump_to_percent_from_start(&mut self, n: u8) {
        Self::jump_to_percent_from_start(self, n);
    }

    fn jump_to_percent_from_end(&mut self, n: u8) {
        Self::jump_to_percent_from_end(self, n);
    }
}
