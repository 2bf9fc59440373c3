//! # homend-nav — Repeat-sensitive home/end navigation
//!
//! Pressing home or end repeatedly walks the cursor outward through four
//! targets and then back to where it started:
//!
//! 1. the line boundary,
//! 2. the window boundary,
//! 3. the document boundary,
//! 4. the origin of the cycle.
//!
//! Any other command in between ends the cycle; the next press starts over
//! from wherever the cursor is.
//!
//! - **[`host`]** — `EditorHost`, everything the navigator asks of an editor
//! - **[`stage`]** — the stage tables and the collapse rule
//! - **[`repeat`]** — `RepeatTracker`, per-command cycle progress
//! - **[`navigator`]** — `Navigator`, per-document sessions and dispatch
//! - **[`error`]** — `NavError`
//!
//! [`NavKey`] is re-exported from `homend-editor`, where it names the two
//! navigation commands, so callers can press keys without depending on the
//! host crate.

pub mod error;
pub mod host;
pub mod navigator;
pub mod repeat;
pub mod stage;

pub use error::NavError;
pub use homend_editor::command::NavKey;
pub use host::EditorHost;
pub use navigator::{NavOutcome, NavSession, Navigator};
pub use repeat::RepeatTracker;
pub use stage::{Stage, StageTable, Step};
