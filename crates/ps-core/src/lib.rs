//! `ps-core` — foundational types for the `prio_sched` task scheduler.
//!
//! This crate is a dependency of every other `ps-*` crate.  It has no `ps-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TaskId`, `Priority`                                  |
//! | [`task`]        | `Task` record and the zero sentinel                   |
//! | [`config`]      | `SchedConfig`                                         |
//! | [`rng`]         | `WorkloadRng` (seeded, deterministic)                 |
//! | [`error`]       | `PsError`, `PsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod task;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MAX_INITIAL_CAPACITY, SchedConfig};
pub use error::{PsError, PsResult};
pub use ids::{Priority, TaskId};
pub use rng::WorkloadRng;
pub use task::Task;
