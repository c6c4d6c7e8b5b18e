//! The `Replay` runner and its summary counters.

use serde::Serialize;

use ps_core::{SchedConfig, Task};
use ps_queue::PriorityScheduler;

use crate::{Op, ReplayError, ReplayObserver, ReplayResult};

// ── ReplaySummary ─────────────────────────────────────────────────────────────

/// Running totals over every op a [`Replay`] has applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct ReplaySummary {
    /// Ops applied, including ignored ones and drain pops.
    pub ops:            usize,
    pub inserted:       usize,
    /// Adds ignored because the id was already held.
    pub duplicates:     usize,
    pub changed:        usize,
    /// Changes ignored because the id was not held.
    pub missed_changes: usize,
    /// Pops that returned a task.
    pub pops:           usize,
    /// Pops against an empty scheduler.
    pub empty_pops:     usize,
    /// Tasks held after the last op.
    pub remaining:      usize,
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// Applies [`Op`] streams to an owned [`PriorityScheduler`].
///
/// Pops go through `try_pop`, so an empty pop and a genuine `(0, 0)` task are
/// reported separately to observers.
pub struct Replay {
    scheduler:        PriorityScheduler,
    check_invariants: bool,
    summary:          ReplaySummary,
}

impl Replay {
    /// Build a runner around an empty scheduler configured by `config`.
    pub fn new(config: &SchedConfig) -> ReplayResult<Self> {
        Ok(Self {
            scheduler:        PriorityScheduler::from_config(config)?,
            check_invariants: config.check_invariants,
            summary:          ReplaySummary::default(),
        })
    }

    pub fn scheduler(&self) -> &PriorityScheduler {
        &self.scheduler
    }

    pub fn summary(&self) -> ReplaySummary {
        self.summary
    }

    /// Apply every op in `ops` in order, then call `observer.on_end`.
    ///
    /// Stops at the first invariant violation when invariant checking is
    /// enabled; ops before it stay applied.
    pub fn run<O: ReplayObserver>(&mut self, ops: &[Op], observer: &mut O) -> ReplayResult<ReplaySummary> {
        for &op in ops {
            self.apply(op, observer)?;
        }
        observer.on_end(&self.summary);
        Ok(self.summary)
    }

    /// Apply one op.
    pub fn apply<O: ReplayObserver>(&mut self, op: Op, observer: &mut O) -> ReplayResult<()> {
        let step = self.summary.ops;
        match op {
            Op::Add { id, priority } => {
                let inserted = self.scheduler.add(id, priority);
                if inserted {
                    self.summary.inserted += 1;
                } else {
                    self.summary.duplicates += 1;
                }
                observer.on_add(step, Task { id, priority }, inserted);
            }
            Op::Change { id, priority } => {
                let old = self.scheduler.change_priority(id, priority);
                if old.is_some() {
                    self.summary.changed += 1;
                } else {
                    self.summary.missed_changes += 1;
                }
                observer.on_change(step, id, old, priority);
            }
            Op::Pop => self.pop(step, observer),
        }
        self.finish_step(step)
    }

    /// Pop every remaining task in priority order.
    pub fn drain<O: ReplayObserver>(&mut self, observer: &mut O) -> ReplayResult<Vec<Task>> {
        let mut out = Vec::with_capacity(self.scheduler.len());
        self.drain_into(&mut out, observer)?;
        Ok(out)
    }

    /// Like [`drain`](Self::drain) but appends to `out`.
    ///
    /// A task is in `out` as soon as it leaves the scheduler, so on an
    /// invariant error `out` still holds every task popped so far.
    pub fn drain_into<O: ReplayObserver>(
        &mut self,
        out:      &mut Vec<Task>,
        observer: &mut O,
    ) -> ReplayResult<()> {
        out.reserve(self.scheduler.len());
        while let Some(task) = self.scheduler.peek() {
            let step = self.summary.ops;
            self.pop(step, observer);
            out.push(task);
            self.finish_step(step)?;
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn pop<O: ReplayObserver>(&mut self, step: usize, observer: &mut O) {
        let popped = self.scheduler.try_pop();
        if popped.is_some() {
            self.summary.pops += 1;
        } else {
            self.summary.empty_pops += 1;
        }
        observer.on_pop(step, popped);
    }

    fn finish_step(&mut self, step: usize) -> ReplayResult<()> {
        self.summary.ops += 1;
        self.summary.remaining = self.scheduler.len();
        if self.check_invariants {
            self.scheduler
                .check_invariants()
                .map_err(|source| ReplayError::Invariant { step, source })?;
        }
        Ok(())
    }
}
