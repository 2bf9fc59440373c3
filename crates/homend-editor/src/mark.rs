//! Mark ring — where the cursor was before a jump.
//!
//! The first press of a home/end cycle records the cycle's origin, and
//! percentage jumps record the pre-jump position. [`Document::pop_mark`]
//! takes marks back off the ring, newest first.
//!
//! [`Document::pop_mark`]: crate::document::Document::pop_mark

use std::collections::VecDeque;

use crate::position::Position;

/// Default number of entries kept in a mark ring.
pub const MARK_RING_DEFAULT: usize = 100;

/// A bounded stack of positions. The oldest mark falls off when the ring is
/// full.
///
/// A mark on the same line as the newest one replaces it, so a burst of jumps
/// from one line leaves a single entry.
#[derive(Debug)]
pub struct MarkRing {
    marks: VecDeque<Position>,
    capacity: usize,
}

impl MarkRing {
    /// An empty ring holding at most `capacity` marks (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            marks: VecDeque::with_capacity(capacity.min(MARK_RING_DEFAULT)),
            capacity,
        }
    }

    /// Change the capacity, dropping the oldest marks if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.trim();
    }

    /// Record `pos` as the newest mark.
    pub fn push(&mut self, pos: Position) {
        if let Some(newest) = self.marks.back_mut() {
            if newest.line == pos.line {
                *newest = pos;
                return;
            }
        }
        self.marks.push_back(pos);
        self.trim();
    }

    /// Take the newest mark that isn't `here`.
    ///
    /// Marks equal to `here` are discarded on the way, since jumping to them
    /// would not move the cursor.
    pub fn pop(&mut self, here: Position) -> Option<Position> {
        while let Some(pos) = self.marks.pop_back() {
            if pos != here {
                return Some(pos);
            }
        }
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    fn trim(&mut self) {
        while self.marks.len() > self.capacity {
            self.marks.pop_front();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_with(lines: &[usize]) -> MarkRing {
        let mut ring = MarkRing::with_capacity(MARK_RING_DEFAULT);
        for &line in lines {
            ring.push(Position::line_start(line));
        }
        ring
    }

    // -- push / pop ---------------------------------------------------------

    #[test]
    fn pop_returns_newest_first() {
        let mut ring = ring_with(&[0, 5, 10]);
        let here = Position::new(15, 0);
        assert_eq!(ring.pop(here), Some(Position::new(10, 0)));
        assert_eq!(ring.pop(here), Some(Position::new(5, 0)));
        assert_eq!(ring.pop(here), Some(Position::ZERO));
        assert_eq!(ring.pop(here), None);
        assert!(ring.is_empty());
    }

    #[test]
    fn push_same_line_replaces_newest() {
        let mut ring = MarkRing::with_capacity(10);
        ring.push(Position::new(3, 0));
        ring.push(Position::new(3, 5));
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.pop(Position::ZERO), Some(Position::new(3, 5)));
    }

    #[test]
    fn pop_skips_marks_at_cursor() {
        let mut ring = ring_with(&[2, 8]);
        assert_eq!(ring.pop(Position::new(8, 0)), Some(Position::new(2, 0)));
        assert!(ring.is_empty());
    }

    #[test]
    fn pop_on_empty_ring() {
        let mut ring = MarkRing::with_capacity(4);
        assert_eq!(ring.pop(Position::ZERO), None);
    }

    // -- Capacity -----------------------------------------------------------

    #[test]
    fn full_ring_drops_oldest() {
        let mut ring = MarkRing::with_capacity(3);
        for line in 0..10 {
            ring.push(Position::line_start(line));
        }
        assert_eq!(ring.len(), 3);
        let here = Position::new(99, 0);
        assert_eq!(ring.pop(here), Some(Position::new(9, 0)));
        assert_eq!(ring.pop(here), Some(Position::new(8, 0)));
        assert_eq!(ring.pop(here), Some(Position::new(7, 0)));
    }

    #[test]
    fn default_capacity_holds_a_hundred() {
        let ring = ring_with(&(0..=MARK_RING_DEFAULT).collect::<Vec<_>>());
        assert_eq!(ring.len(), MARK_RING_DEFAULT);
    }

    #[test]
    fn shrinking_capacity_drops_oldest() {
        let mut ring = ring_with(&[0, 1, 2, 3, 4, 5, 6, 7]);
        ring.set_capacity(2);
        assert_eq!(ring.len(), 2);
        assert_eq!(ring.pop(Position::ZERO), Some(Position::new(7, 0)));
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut ring = MarkRing::with_capacity(0);
        ring.push(Position::new(1, 0));
        ring.push(Position::new(2, 0));
        assert_eq!(ring.len(), 1);
    }
}
