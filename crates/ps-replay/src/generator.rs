//! Deterministic synthetic workloads.
//!
//! Ops are drawn independently: the kind by weight, the id uniformly from
//! `0..id_space`, the priority uniformly from `priority_min..=priority_max`.
//! A small `id_space` gives many duplicate adds and hits on held tasks; a
//! large one gives mostly fresh adds and missed changes.

use ps_core::{PsError, PsResult, WorkloadRng};

use crate::Op;

/// Shape of a generated workload.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of ops to generate.
    pub ops: usize,
    /// Ids are drawn from `0..id_space`.
    pub id_space: i64,
    pub priority_min: i64,
    pub priority_max: i64,
    /// Relative weights of add / change / pop.
    pub add_weight:    u32,
    pub change_weight: u32,
    pub pop_weight:    u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            ops:           1_000,
            id_space:      256,
            priority_min:  -1_000,
            priority_max:  1_000,
            add_weight:    5,
            change_weight: 3,
            pop_weight:    2,
        }
    }
}

impl WorkloadConfig {
    pub fn validate(&self) -> PsResult<()> {
        if self.id_space <= 0 {
            return Err(PsError::Config(format!("id_space must be positive, got {}", self.id_space)));
        }
        if self.priority_min > self.priority_max {
            return Err(PsError::Config(format!(
                "priority_min {} exceeds priority_max {}",
                self.priority_min, self.priority_max
            )));
        }
        if self.total_weight() == 0 {
            return Err(PsError::Config("all op weights are zero".into()));
        }
        Ok(())
    }

    fn total_weight(&self) -> u64 {
        self.add_weight as u64 + self.change_weight as u64 + self.pop_weight as u64
    }
}

/// Generate `config.ops` operations.  The same `(config, seed)` always yields
/// the same sequence.
pub fn generate_workload(config: &WorkloadConfig, seed: u64) -> PsResult<Vec<Op>> {
    config.validate()?;
    let mut rng = WorkloadRng::new(seed);
    let add_cut = config.add_weight as u64;
    let change_cut = add_cut + config.change_weight as u64;

    let ops = (0..config.ops)
        .map(|_| {
            let roll = rng.gen_range(0..config.total_weight());
            if roll >= change_cut {
                return Op::Pop;
            }
            let id = rng.gen_range(0..config.id_space);
            let priority = rng.gen_range(config.priority_min..=config.priority_max);
            if roll < add_cut {
                Op::add(id, priority)
            } else {
                Op::change(id, priority)
            }
        })
        .collect();
    Ok(ops)
}
