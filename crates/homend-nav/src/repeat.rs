//! Repeat tracking for cycling commands.
//!
//! A [`RepeatTracker`] remembers, per command, which stage the next press
//! should run. It only holds state for a command while that command keeps
//! being pressed: [`observe`](RepeatTracker::observe) drops every entry the
//! previous command doesn't match, so any interleaved command ends the cycle.

use std::collections::HashMap;

use homend_editor::command::CommandId;

use crate::stage::ORIGIN_STAGE;

/// Where a command's cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleState {
    /// The next press runs this stage.
    Next(usize),
    /// The terminal stage has run; the next press starts over.
    Finished,
}

/// Per-command cycle progress.
#[derive(Debug, Clone, Default)]
pub struct RepeatTracker {
    cycles: HashMap<CommandId, CycleState>,
}

impl RepeatTracker {
    /// Forget every cycle except the one belonging to `last_command`.
    pub fn observe(&mut self, last_command: Option<CommandId>) {
        match last_command {
            Some(last) => self.cycles.retain(|id, _| *id == last),
            None => self.cycles.clear(),
        }
    }

    /// Start a new cycle for `cmd` at stage `initial`, dropping any other
    /// cycle. Returns the stage to run.
    pub fn begin_cycle(&mut self, cmd: CommandId, initial: usize) -> usize {
        self.cycles.clear();
        self.cycles.insert(cmd, CycleState::Next(initial));
        initial
    }

    /// The stage the next press of `cmd` should run, if a cycle is live.
    #[must_use]
    pub fn next_stage(&self, cmd: CommandId) -> Option<usize> {
        match self.cycles.get(&cmd) {
            Some(CycleState::Next(index)) => Some(*index),
            Some(CycleState::Finished) | None => None,
        }
    }

    /// Record that `cmd` ran stage `ran`.
    pub fn complete(&mut self, cmd: CommandId, ran: usize) {
        let state = if ran >= ORIGIN_STAGE {
            CycleState::Finished
        } else {
            CycleState::Next(ran + 1)
        };
        self.cycles.insert(cmd, state);
    }

    /// Whether `cmd` has a cycle that the next press would continue.
    #[must_use]
    pub fn is_in_cycle(&self, cmd: CommandId) -> bool {
        self.next_stage(cmd).is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const HOME: CommandId = CommandId::NAVIGATE_HOME;
    const END: CommandId = CommandId::NAVIGATE_END;

    fn state(tracker: &RepeatTracker, cmd: CommandId) -> Option<CycleState> {
        tracker.cycles.get(&cmd).copied()
    }

    #[test]
    fn empty_tracker_has_no_cycle() {
        let tracker = RepeatTracker::default();
        assert_eq!(tracker.next_stage(HOME), None);
        assert!(!tracker.is_in_cycle(END));
    }

    #[test]
    fn cycle_advances_through_stages() {
        let mut tracker = RepeatTracker::default();
        assert_eq!(tracker.begin_cycle(END, 0), 0);
        tracker.complete(END, 0);
        assert_eq!(tracker.next_stage(END), Some(1));
        tracker.complete(END, 1);
        tracker.complete(END, 2);
        assert_eq!(tracker.next_stage(END), Some(3));
        tracker.complete(END, 3);
        assert_eq!(state(&tracker, END), Some(CycleState::Finished));
        assert_eq!(tracker.next_stage(END), None);
    }

    #[test]
    fn begin_cycle_drops_other_commands() {
        let mut tracker = RepeatTracker::default();
        tracker.begin_cycle(HOME, 1);
        tracker.begin_cycle(END, 0);
        assert_eq!(state(&tracker, HOME), None);
        assert_eq!(tracker.next_stage(END), Some(0));
    }

    // -- observe ------------------------------------------------------------

    #[test]
    fn observe_same_command_keeps_cycle() {
        let mut tracker = RepeatTracker::default();
        tracker.begin_cycle(HOME, 0);
        tracker.complete(HOME, 0);
        tracker.observe(Some(HOME));
        assert_eq!(tracker.next_stage(HOME), Some(1));
    }

    #[test]
    fn observe_other_command_clears() {
        let mut tracker = RepeatTracker::default();
        tracker.begin_cycle(HOME, 0);
        tracker.complete(HOME, 0);
        tracker.observe(Some(CommandId::MOVE_LEFT));
        assert_eq!(state(&tracker, HOME), None);
    }

    #[test]
    fn observe_nothing_clears() {
        let mut tracker = RepeatTracker::default();
        tracker.begin_cycle(END, 2);
        tracker.observe(None);
        assert!(!tracker.is_in_cycle(END));
    }
}
