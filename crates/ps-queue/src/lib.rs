//! `ps-queue` — the indexed max-priority scheduler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`scheduler`]   | `PriorityScheduler` (`Vec<Task>` heap + `FxHashMap` index) |
//! | [`invariant`]   | `InvariantError`, heap-order and index checks         |
//!
//! # Storage model (summary)
//!
//! ```text
//! heap:  [ t0, t1, t2, t3, t4, ... ]      parent(i) = (i - 1) / 2
//!          │                              children(i) = 2i + 1, 2i + 2
//! index: { t.id → slot of t }             kept in lockstep on every swap
//! ```
//!
//! The index turns "find task by id, then repair the heap" into
//! O(1) + O(log n) instead of an O(n) scan.

pub mod invariant;
pub mod scheduler;


pub use invariant::InvariantError;
pub use scheduler::PriorityScheduler;
