//! Replay observer trait for logging and data collection.

use log::{debug, info};

use ps_core::{Priority, Task, TaskId};

use crate::ReplaySummary;

/// Callbacks invoked by [`Replay`][crate::Replay] after each operation.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `step` is the 0-based position of the op
/// across the lifetime of the `Replay`.
///
/// # Example — print every pop
///
/// ```rust,ignore
/// struct PopPrinter;
///
/// impl ReplayObserver for PopPrinter {
///     fn on_pop(&mut self, step: usize, popped: Option<Task>) {
///         if let Some(task) = popped {
///             println!("{step}: {task}");
///         }
///     }
/// }
/// ```
pub trait ReplayObserver {
    /// `inserted` is `false` when the id was already held and the add was
    /// ignored.
    fn on_add(&mut self, _step: usize, _task: Task, _inserted: bool) {}

    /// `old` is `None` when the id was not held and the change was ignored.
    fn on_change(&mut self, _step: usize, _id: TaskId, _old: Option<Priority>, _new: Priority) {}

    /// `popped` is `None` when the scheduler was empty.
    fn on_pop(&mut self, _step: usize, _popped: Option<Task>) {}

    /// Called once at the end of [`Replay::run`][crate::Replay::run].
    fn on_end(&mut self, _summary: &ReplaySummary) {}
}

/// A [`ReplayObserver`] that does nothing.
pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}

/// Emits one `debug!` record per op and an `info!` summary.
pub struct LogObserver;

impl ReplayObserver for LogObserver {
    fn on_add(&mut self, step: usize, task: Task, inserted: bool) {
        if inserted {
            debug!("#{step} add {task}");
        } else {
            debug!("#{step} add {task} ignored (duplicate id)");
        }
    }

    fn on_change(&mut self, step: usize, id: TaskId, old: Option<Priority>, new: Priority) {
        match old {
            Some(old) => debug!("#{step} change {} {} -> {}", id.0, old.0, new.0),
            None      => debug!("#{step} change {} ignored (not scheduled)", id.0),
        }
    }

    fn on_pop(&mut self, step: usize, popped: Option<Task>) {
        match popped {
            Some(task) => debug!("#{step} pop -> {task}"),
            None       => debug!("#{step} pop -> empty"),
        }
    }

    fn on_end(&mut self, summary: &ReplaySummary) {
        info!(
            "replayed {} ops: {} added ({} duplicate), {} changed ({} ignored), {} popped ({} empty), {} remaining",
            summary.ops,
            summary.inserted,
            summary.duplicates,
            summary.changed,
            summary.missed_changes,
            summary.pops,
            summary.empty_pops,
            summary.remaining,
        );
    }
}

/// Collects every task actually popped, in order.
#[derive(Default)]
pub struct RecordingObserver {
    pub popped: Vec<Task>,
}

impl ReplayObserver for RecordingObserver {
    fn on_pop(&mut self, _step: usize, popped: Option<Task>) {
        self.popped.extend(popped);
    }
}
