//! The `Task` record held by the scheduler.

use std::fmt;

use crate::{Priority, TaskId};

/// One schedulable unit: an identifier and its current priority.
///
/// `Task` is `Copy`.  Schedulers store tasks by value and hand out copies, so
/// a caller mutating its own `Task` after adding it never affects the queue.
///
/// `Task::default()` is the zero task `(0, 0)`, which `pop` on an empty
/// scheduler returns as its "nothing available" sentinel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub id:       TaskId,
    pub priority: Priority,
}

impl Task {
    /// The value `pop` returns when there is nothing to pop.
    pub const SENTINEL: Task = Task { id: TaskId::ZERO, priority: Priority::ZERO };

    /// Build a task from raw integers.
    #[inline]
    pub fn new(id: i64, priority: i64) -> Self {
        Self { id: TaskId(id), priority: Priority(priority) }
    }

    /// `true` if this task equals the empty-pop sentinel.
    ///
    /// A genuine task `(0, 0)` is indistinguishable from the sentinel; use
    /// `try_pop` or `is_empty` on the scheduler when that matters.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task {} @ {}", self.id.0, self.priority.0)
    }
}
