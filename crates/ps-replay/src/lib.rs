//! `ps-replay` — drive a `PriorityScheduler` from scripted or synthetic
//! operation streams.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`op`]         | `Op` (`Add`, `Change`, `Pop`)                             |
//! | [`script`]     | `load_script_csv`, `load_script_reader`                   |
//! | [`generator`]  | `WorkloadConfig`, `generate_workload`                     |
//! | [`observer`]   | `ReplayObserver`, `NoopObserver`, `LogObserver`, `RecordingObserver` |
//! | [`runner`]     | `Replay`, `ReplaySummary`                                 |
//! | [`error`]      | `ReplayError`, `ReplayResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ps_core::SchedConfig;
//! use ps_replay::{load_script_csv, LogObserver, Replay};
//!
//! let ops = load_script_csv(Path::new("trace.csv"))?;
//! let mut replay = Replay::new(&SchedConfig::default().checked())?;
//! let summary = replay.run(&ops, &mut LogObserver)?;
//! ```

pub mod error;
pub mod generator;
pub mod observer;
pub mod op;
pub mod runner;
pub mod script;

#[cfg(test)]
mod tests;

pub use error::{ReplayError, ReplayResult};
pub use generator::{WorkloadConfig, generate_workload};
pub use observer::{LogObserver, NoopObserver, RecordingObserver, ReplayObserver};
pub use op::Op;
pub use runner::{Replay, ReplaySummary};
pub use script::{load_script_csv, load_script_reader};
