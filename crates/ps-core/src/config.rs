//! Scheduler configuration.

use crate::{PsError, PsResult};

/// Upper bound on `SchedConfig::initial_capacity`.  Reserving more than this
/// up front is almost certainly a units mistake in the caller's config.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 26;

// ── SchedConfig ───────────────────────────────────────────────────────────────

/// Construction-time settings for a scheduler and the replay runner.
///
/// Typically built in code or loaded from a TOML/JSON file by the
/// application crate (with the `serde` feature).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedConfig {
    /// Slots reserved in heap storage and the identity index at construction.
    pub initial_capacity: usize,

    /// Run the full invariant check after every replayed operation.  O(n)
    /// per operation, so only for tests and debugging.
    pub check_invariants: bool,

    /// Master RNG seed for synthetic workloads.  The same seed always
    /// produces the same operation sequence.
    pub seed: u64,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            check_invariants: false,
            seed:             42,
        }
    }
}

impl SchedConfig {
    /// Reject settings no scheduler should be built from.
    pub fn validate(&self) -> PsResult<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(PsError::Config(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    /// Same config with invariant checking switched on.
    pub fn checked(mut self) -> Self {
        self.check_invariants = true;
        self
    }
}
