//! `PriorityScheduler` — mutable max-priority queue with lookup by task id.
//!
//! # Why an index
//!
//! A plain binary heap can only find a task by scanning every slot, so a
//! priority change costs O(n).  The scheduler keeps a side map from task id
//! to heap slot and re-points it on every swap; a priority change is then an
//! O(1) lookup followed by one O(log n) sift in a single direction.
//!
//! # Degenerate inputs
//!
//! Nothing here returns an error:
//!
//! | Call                                 | Effect                               |
//! |--------------------------------------|--------------------------------------|
//! | `add` with an id already held        | ignored; stored priority untouched   |
//! | `change_priority` on an unknown id   | ignored                              |
//! | `pop` on an empty scheduler          | returns `Task::SENTINEL` (`(0, 0)`)  |
//!
//! The empty-pop sentinel collides with a genuine task `(0, 0)`.  Callers
//! that may hold such a task use [`PriorityScheduler::try_pop`] or check
//! [`PriorityScheduler::is_empty`] first.

use std::cmp::Ordering;

use log::trace;
use rustc_hash::FxHashMap;

use ps_core::{Priority, PsResult, SchedConfig, Task, TaskId};

use crate::invariant::{self, InvariantError};

/// Max-priority task scheduler backed by an implicit binary heap.
///
/// Single-owner and not internally synchronised.  Wrap it in a `Mutex` (or
/// give it to one task that owns it) if several threads need it.
#[derive(Clone, Debug, Default)]
pub struct PriorityScheduler {
    /// Implicit binary max-heap, dense and 0-indexed.
    heap:  Vec<Task>,
    /// `task.id → slot in heap` for every held task.
    index: FxHashMap<TaskId, usize>,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scheduler with room for `capacity` tasks before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap:  Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Validate `config` and build an empty scheduler from it.
    pub fn from_config(config: &SchedConfig) -> PsResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a task with `id` and `priority`.
    ///
    /// Returns `false` (and changes nothing) if `id` is already held; the
    /// existing task keeps its priority.
    pub fn add(&mut self, id: TaskId, priority: Priority) -> bool {
        if self.index.contains_key(&id) {
            trace!("add ignored: {id} already scheduled");
            return false;
        }
        let slot = self.heap.len();
        self.heap.push(Task { id, priority });
        self.index.insert(id, slot);
        self.sift_up(slot);
        true
    }

    /// [`add`](Self::add) taking a whole `Task`.
    #[inline]
    pub fn add_task(&mut self, task: Task) -> bool {
        self.add(task.id, task.priority)
    }

    /// Set the priority of task `id` and restore heap order.
    ///
    /// Returns the previous priority, or `None` if `id` is not held (in which
    /// case nothing changes).
    pub fn change_priority(&mut self, id: TaskId, priority: Priority) -> Option<Priority> {
        let Some(&slot) = self.index.get(&id) else {
            trace!("change_priority ignored: {id} not scheduled");
            return None;
        };
        let old = self.heap[slot].priority;
        self.heap[slot].priority = priority;
        match priority.cmp(&old) {
            Ordering::Greater => self.sift_up(slot),
            Ordering::Less    => self.sift_down(slot),
            Ordering::Equal   => {}
        }
        Some(old)
    }

    /// Remove and return the highest-priority task.
    ///
    /// Returns `Task::SENTINEL` when empty.
    #[inline]
    pub fn pop(&mut self) -> Task {
        self.try_pop().unwrap_or_default()
    }

    /// Remove and return the highest-priority task, or `None` when empty.
    pub fn try_pop(&mut self) -> Option<Task> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            // `last` was the root.
            self.index.remove(&last.id);
            return Some(last);
        }
        let root = std::mem::replace(&mut self.heap[0], last);
        self.index.insert(last.id, 0);
        self.index.remove(&root.id);
        self.sift_down(0);
        Some(root)
    }

    /// Drop every task, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The highest-priority task without removing it.
    #[inline]
    pub fn peek(&self) -> Option<Task> {
        self.heap.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: TaskId) -> bool {
        self.index.contains_key(&id)
    }

    /// Current priority of task `id`, if held.
    pub fn priority_of(&self, id: TaskId) -> Option<Priority> {
        self.index.get(&id).map(|&slot| self.heap[slot].priority)
    }

    /// Copies of all held tasks in heap-storage order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = Task> + '_ {
        self.heap.iter().copied()
    }

    /// Verify heap order and index consistency.  O(n).
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        invariant::check(&self.heap, &self.index)
    }

    // ── Heap repair ───────────────────────────────────────────────────────

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[parent].priority >= self.heap[slot].priority {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            // Left wins ties.
            let right = left + 1;
            let mut largest = left;
            if right < len && self.heap[right].priority > self.heap[left].priority {
                largest = right;
            }
            if self.heap[slot].priority >= self.heap[largest].priority {
                break;
            }
            self.swap(slot, largest);
            slot = largest;
        }
    }

    /// Exchange two slots and re-point both index entries.
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.index.insert(self.heap[i].id, i);
        self.index.insert(self.heap[j].id, j);
    }
}

impl Extend<Task> for PriorityScheduler {
    /// Add each task in turn; duplicates are ignored as with `add`.
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.add_task(task);
        }
    }
}

impl FromIterator<Task> for PriorityScheduler {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut scheduler = Self::new();
        scheduler.extend(iter);
        scheduler
    }
}
