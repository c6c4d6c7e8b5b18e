//! One scheduler operation in a replayable stream.

use std::fmt;

use ps_core::{Priority, TaskId};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Op {
    /// `PriorityScheduler::add`.
    Add { id: TaskId, priority: Priority },
    /// `PriorityScheduler::change_priority`.
    Change { id: TaskId, priority: Priority },
    /// `PriorityScheduler::try_pop`.
    Pop,
}

impl Op {
    #[inline]
    pub fn add(id: i64, priority: i64) -> Self {
        Op::Add { id: TaskId(id), priority: Priority(priority) }
    }

    #[inline]
    pub fn change(id: i64, priority: i64) -> Self {
        Op::Change { id: TaskId(id), priority: Priority(priority) }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add { id, priority }    => write!(f, "add {} {}", id.0, priority.0),
            Op::Change { id, priority } => write!(f, "change {} {}", id.0, priority.0),
            Op::Pop                     => f.write_str("pop"),
        }
    }
}
