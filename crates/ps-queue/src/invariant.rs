//! Structural checks for the scheduler's heap and identity index.

use rustc_hash::FxHashMap;
use thiserror::Error;

use ps_core::{Task, TaskId};

/// A broken scheduler invariant.  Seeing one of these is always a bug in the
/// scheduler, never in the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("heap order violated: slot {parent} has lower priority than child slot {child}")]
    HeapOrder { parent: usize, child: usize },

    #[error("index maps {id} to slot {found} but the task is in slot {expected}")]
    IndexMismatch { id: TaskId, expected: usize, found: usize },

    #[error("{id} in slot {slot} has no index entry")]
    MissingIndex { id: TaskId, slot: usize },

    #[error("index holds {index} entries for {heap} tasks")]
    SizeMismatch { heap: usize, index: usize },
}

/// Check max-heap order over `heap` and that `index` is exactly the inverse
/// of it.
pub(crate) fn check(heap: &[Task], index: &FxHashMap<TaskId, usize>) -> Result<(), InvariantError> {
    for child in 1..heap.len() {
        let parent = (child - 1) / 2;
        if heap[parent].priority < heap[child].priority {
            return Err(InvariantError::HeapOrder { parent, child });
        }
    }

    for (slot, task) in heap.iter().enumerate() {
        match index.get(&task.id) {
            None => return Err(InvariantError::MissingIndex { id: task.id, slot }),
            Some(&found) if found != slot => {
                return Err(InvariantError::IndexMismatch { id: task.id, expected: slot, found });
            }
            Some(_) => {}
        }
    }

    // Every heap task maps to its own slot, so equal sizes rule out stale
    // entries.
    if index.len() != heap.len() {
        return Err(InvariantError::SizeMismatch { heap: heap.len(), index: index.len() });
    }
    Ok(())
}
