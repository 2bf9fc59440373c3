//! Navigator — the `navigate-home` / `navigate-end` commands.
//!
//! Each press either continues the cycle the same key started, or starts a
//! fresh one. A fresh cycle records the cursor as its origin and pushes it
//! onto the host's mark history; a continued cycle picks up at the stage the
//! tracker has queued. Stages that would not move the cursor are skipped, so
//! every successful press lands somewhere new.
//!
//! State is kept per document in a [`NavSession`], created the first time a
//! document is navigated.

use std::collections::HashMap;

use homend_editor::command::{Command, CommandId, NavKey};
use homend_editor::document::{Document, DocumentId};
use homend_editor::position::Position;
use tracing::debug;

use crate::error::NavError;
use crate::host::EditorHost;
use crate::repeat::RepeatTracker;
use crate::stage::{ORIGIN_STAGE, Stage, StageTable, Step};

// ---------------------------------------------------------------------------
// NavSession
// ---------------------------------------------------------------------------

/// Cycle state for one document.
#[derive(Debug, Clone, Default)]
pub struct NavSession {
    origin: Option<Position>,
    tracker: RepeatTracker,
}

impl NavSession {
    /// Where the current (or last) cycle started.
    #[must_use]
    pub const fn origin(&self) -> Option<Position> {
        self.origin
    }

}

// ---------------------------------------------------------------------------
// NavOutcome
// ---------------------------------------------------------------------------

/// What a successful press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A numeric argument sent the cursor `decile` tenths through the
    /// document. Cycle state was left alone.
    PercentJump { key: NavKey, decile: u8, to: Position },

    /// A cycle stage ran.
    Moved {
        key: NavKey,
        stage: Stage,
        /// Index of the stage that ran, after skipping collapsed ones.
        index: usize,
        to: Position,
        /// Whether this press started the cycle.
        fresh: bool,
    },
}

impl NavOutcome {
    /// Cursor position after the press.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::PercentJump { to, .. } | Self::Moved { to, .. } => to,
        }
    }

    #[must_use]
    pub const fn stage(self) -> Option<Stage> {
        match self {
            Self::Moved { stage, .. } => Some(stage),
            Self::PercentJump { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Dispatches home/end presses and owns every document's cycle state.
#[derive(Debug, Default)]
pub struct Navigator {
    sessions: HashMap<DocumentId, NavSession>,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for `doc`, if it has been navigated.
    #[must_use]
    pub fn session(&self, doc: DocumentId) -> Option<&NavSession> {
        self.sessions.get(&doc)
    }

    /// Handle one press of `key`.
    ///
    /// A non-zero `arg` is a percentage jump and bypasses the cycle entirely.
    ///
    /// # Errors
    ///
    /// [`NavError::BoundaryNoOp`] when a fresh cycle would start on the
    /// document boundary `key` points to. Nothing is mutated in that case.
    pub fn navigate<H: EditorHost + ?Sized>(
        &mut self,
        host: &mut H,
        key: NavKey,
        arg: Option<u8>,
    ) -> Result<NavOutcome, NavError> {
        let cmd = key.command_id();
        let last = host.last_command();
        let session = self.sessions.entry(host.document_id()).or_default();
        session.tracker.observe(last);

        if let Some(decile) = arg.filter(|&n| n > 0) {
            return Ok(percent_jump(host, key, decile));
        }

        let fresh = last != Some(cmd) || !session.tracker.is_in_cycle(cmd);
        let start = if fresh {
            begin_cycle(session, host, key, cmd)?
        } else {
            session.tracker.next_stage(cmd).unwrap_or(0)
        };

        let table = StageTable::for_key(key);
        let origin = session.origin.unwrap_or_else(|| host.cursor());
        let mut index = start;
        let target = loop {
            match table.resolve(index, &*host, origin) {
                Step::MoveTo(pos) => break pos,
                Step::AlreadyThere if index < ORIGIN_STAGE => {
                    debug!(%key, index, "stage collapsed");
                    index += 1;
                }
                Step::AlreadyThere => break origin,
            }
        };

        host.move_cursor_to(target);
        session.tracker.complete(cmd, index);

        let stage = table.stage(index).unwrap_or(Stage::Origin);
        let to = host.cursor();
        debug!(%key, %stage, index, ?to, "stage ran");
        Ok(NavOutcome::Moved {
            key,
            stage,
            index,
            to,
            fresh,
        })
    }

    /// Run any command against `doc`. Navigation keys go through the cycle;
    /// everything else is a host motion. The command is recorded as the
    /// document's last command either way, including when it fails.
    ///
    /// # Errors
    ///
    /// Whatever [`navigate`](Self::navigate) reports.
    pub fn execute(
        &mut self,
        doc: &mut Document,
        cmd: Command,
    ) -> Result<Option<NavOutcome>, NavError> {
        let result = match cmd {
            Command::Navigate { key, arg } => self.navigate(doc, key, arg).map(Some),
            Command::Motion(motion) => {
                doc.run_motion(motion);
                Ok(None)
            }
        };
        doc.finish_command(cmd.id());
        result
    }
}

/// Start a cycle from the cursor: check the document boundary, record the
/// origin, and pick the first stage.
fn begin_cycle<H: EditorHost + ?Sized>(
    session: &mut NavSession,
    host: &mut H,
    key: NavKey,
    cmd: CommandId,
) -> Result<usize, NavError> {
    let (at_document_edge, at_line_edge) = match key {
        NavKey::Home => (host.at_document_start(), host.at_line_start()),
        NavKey::End => (host.at_document_end(), host.at_line_end()),
    };
    if at_document_edge {
        debug!(%key, "cycle refused at document boundary");
        return Err(NavError::BoundaryNoOp { key });
    }

    let here = host.cursor();
    host.push_mark(here);
    session.origin = Some(here);

    let initial = usize::from(at_line_edge);
    debug!(%key, origin = ?here, initial, "cycle started");
    Ok(session.tracker.begin_cycle(cmd, initial))
}

fn percent_jump<H: EditorHost + ?Sized>(host: &mut H, key: NavKey, decile: u8) -> NavOutcome {
    match key {
        NavKey::Home => host.jump_to_percent_from_start(decile),
        NavKey::End => host.jump_to_percent_from_end(decile),
    }
    let to = host.cursor();
    debug!(%key, decile, ?to, "percent jump");
    NavOutcome::PercentJump { key, decile, to }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
