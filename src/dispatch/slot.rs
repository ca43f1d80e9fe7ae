// src/dispatch/slot.rs
// Single slot tracking the most recently accepted goal.

use std::cell::RefCell;

use log::warn;

use super::GoalHandle;

/// Holds the handle of the most recently accepted goal
///
/// A new acceptance overwrites the slot without canceling the previous goal;
/// that goal's own cycle still awaits and reports its result.
#[derive(Debug, Default)]
pub struct HandleSlot {
    current: RefCell<Option<GoalHandle>>,
}

impl HandleSlot {
    /// Empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle`, returning the goal it supersedes, if any
    pub fn track(&self, handle: GoalHandle) -> Option<GoalHandle> {
        let previous = self.current.borrow_mut().replace(handle);
        if let Some(previous) = previous {
            warn!(
                "Goal {} superseded by goal {} before reaching a terminal state",
                previous.id(),
                handle.id()
            );
        }
        previous
    }

    /// Forget `handle` once it is resolved. A newer goal stays tracked.
    pub fn release(&self, handle: GoalHandle) -> bool {
        let mut current = self.current.borrow_mut();
        if *current == Some(handle) {
            *current = None;
            true
        } else {
            false
        }
    }

    /// Currently tracked goal
    pub fn current(&self) -> Option<GoalHandle> {
        *self.current.borrow()
    }
}
