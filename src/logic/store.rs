//! Position Store
//!
//! Holds the counter position, the position at the last consuming read and
//! the pending-change flag. The store itself is plain data; callers wrap it
//! in a critical section so no partial update is ever observed.

use super::policy::{self, StepOutcome};
use crate::types::{Count, Direction, Range, Snapshot};

/// Counter position with change tracking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionStore {
    position: Count,
    previous: Count,
    pending_change: bool,
}

impl PositionStore {
    /// Create a store resting at `position`
    #[must_use]
    pub const fn new(position: Count) -> Self {
        Self {
            position,
            previous: position,
            pending_change: false,
        }
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> Count {
        self.position
    }

    /// Position at the last consuming read
    #[must_use]
    pub const fn previous(&self) -> Count {
        self.previous
    }

    /// Check if a change is waiting to be consumed
    #[must_use]
    pub const fn has_changed(&self) -> bool {
        self.pending_change
    }

    /// Set or clear the pending-change flag
    pub fn set_changed(&mut self, changed: bool) {
        self.pending_change = changed;
    }

    /// Snapshot without consuming the change
    #[must_use]
    pub const fn current_state(&self) -> Snapshot {
        Snapshot::new(self.previous, self.position)
    }

    /// Snapshot that consumes the change
    ///
    /// Clears the pending flag and, only when the position moved, advances
    /// `previous` so the next read reports motion from here.
    pub fn read_state(&mut self) -> Snapshot {
        let snapshot = self.current_state();
        self.pending_change = false;
        if snapshot.moved() {
            self.previous = self.position;
        }
        snapshot
    }

    /// Apply `times` steps under `range`, marking a change if any step counts
    pub fn step(&mut self, range: Range, circular: bool, direction: Direction, times: u8) -> Count {
        let StepOutcome { position, changed } =
            policy::step_many(self.position, range, circular, direction, times);
        self.position = position;
        if changed {
            self.pending_change = true;
        }
        self.position
    }

    /// Set the position if it lies inside `range`
    ///
    /// Both current and previous are set, so the next read reports no
    /// motion. Out-of-range positions are ignored.
    pub fn set_position(&mut self, position: Count, range: Range) -> Count {
        if range.contains(position) {
            self.position = position;
            self.previous = position;
        }
        self.position
    }

    /// Snap to the minimum of `range` if the position falls outside it
    ///
    /// Returns `true` if the position was reset. A position that stays
    /// inside keeps its pending motion, with `previous` pulled to the
    /// nearest bound.
    pub fn reclamp(&mut self, range: Range) -> bool {
        match policy::reclamp(self.position, range) {
            Some(min) => {
                self.position = min;
                self.previous = min;
                true
            }
            None => {
                self.previous = self.previous.clamp(range.min(), range.max());
                false
            }
        }
    }
}
