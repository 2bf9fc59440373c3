//! Stage tables: the four targets each key cycles through.
//!
//! | Index | Stage      | home                | end                          |
//! |-------|------------|---------------------|------------------------------|
//! | 0     | `Line`     | line start          | line end                     |
//! | 1     | `Window`   | top of window       | end of the window's last line |
//! | 2     | `Document` | document start      | document end                 |
//! | 3     | `Origin`   | cycle origin        | cycle origin                 |
//!
//! Resolving a stage never mutates anything. An interior stage whose target
//! is where the cursor already is answers [`Step::AlreadyThere`] and the
//! caller moves on to the next stage; the origin stage always yields a
//! position.

use std::fmt;

use homend_editor::command::NavKey;
use homend_editor::position::Position;

use crate::host::EditorHost;

/// Number of stages in every table.
pub const STAGE_COUNT: usize = 4;

/// Index of the terminal (return-to-origin) stage.
pub const ORIGIN_STAGE: usize = STAGE_COUNT - 1;

/// A navigation target, from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Line,
    Window,
    Document,
    Origin,
}

impl Stage {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Window => "window",
            Self::Document => "document",
            Self::Origin => "origin",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What resolving a stage produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move the cursor here.
    MoveTo(Position),
    /// The target is where the cursor already is; try the next stage.
    AlreadyThere,
}

/// The fixed stage sequence for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTable {
    key: NavKey,
    stages: [Stage; STAGE_COUNT],
}

const ORDER: [Stage; STAGE_COUNT] = [Stage::Line, Stage::Window, Stage::Document, Stage::Origin];

impl StageTable {
    pub const HOME: Self = Self {
        key: NavKey::Home,
        stages: ORDER,
    };

    pub const END: Self = Self {
        key: NavKey::End,
        stages: ORDER,
    };

    /// The table bound to `key`.
    #[must_use]
    pub const fn for_key(key: NavKey) -> &'static Self {
        match key {
            NavKey::Home => &Self::HOME,
            NavKey::End => &Self::END,
        }
    }

    /// The stage at `index`, or `None` past the end of the table.
    #[must_use]
    pub const fn stage(&self, index: usize) -> Option<Stage> {
        if index < STAGE_COUNT {
            Some(self.stages[index])
        } else {
            None
        }
    }

    /// Resolve the stage at `index` against the host's current state.
    ///
    /// `origin` is where the current cycle began. Indices past the end of the
    /// table resolve like the origin stage.
    pub fn resolve<H: EditorHost + ?Sized>(&self, index: usize, host: &H, origin: Position) -> Step {
        let stage = self.stage(index).unwrap_or(Stage::Origin);
        let target = match (stage, self.key) {
            (Stage::Origin, _) => return Step::MoveTo(origin),
            (Stage::Line, NavKey::Home) => host.line_start(),
            (Stage::Line, NavKey::End) => host.line_end(),
            // Interior stages have nowhere to go once the cursor sits on the
            // document boundary for this key.
            (Stage::Window | Stage::Document, NavKey::Home) if host.at_document_start() => {
                return Step::AlreadyThere;
            }
            (Stage::Window | Stage::Document, NavKey::End) if host.at_document_end() => {
                return Step::AlreadyThere;
            }
            (Stage::Window, NavKey::Home) => host.window_start(),
            (Stage::Window, NavKey::End) => window_bottom(host),
            (Stage::Document, NavKey::Home) => host.document_start(),
            (Stage::Document, NavKey::End) => host.document_end(),
        };

        if target == host.cursor() {
            Step::AlreadyThere
        } else {
            Step::MoveTo(target)
        }
    }
}

/// End of the last line in the window: one line above the window's end
/// boundary, or the document end itself when the window shows it.
fn window_bottom<H: EditorHost + ?Sized>(host: &H) -> Position {
    let boundary = host.window_end();
    if boundary == host.document_end() {
        boundary
    } else {
        host.line_end_of(boundary.line.saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
