//! Unit tests for ps-replay.

use ps_core::{Priority, SchedConfig, Task, TaskId};

use crate::{
    NoopObserver, Op, RecordingObserver, Replay, ReplayError, ReplayObserver, ReplaySummary,
    WorkloadConfig, generate_workload, load_script_reader,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const REFERENCE_CSV: &str = "\
op,id,priority\n\
add,1,10\n\
add,2,20\n\
add,3,30\n\
add,4,40\n\
add,5,50\n\
pop,,\n\
pop,,\n\
change,1,100\n\
pop,,\n\
pop,,\n\
";

fn checked_replay() -> Replay {
    Replay::new(&SchedConfig::default().checked()).unwrap()
}

// ── Script loading ────────────────────────────────────────────────────────────

#[cfg(test)]
mod script {
    use super::*;

    #[test]
    fn parses_reference_script() {
        let ops = load_script_reader(REFERENCE_CSV.as_bytes()).unwrap();
        assert_eq!(ops.len(), 10);
        assert_eq!(ops[0], Op::add(1, 10));
        assert_eq!(ops[5], Op::Pop);
        assert_eq!(ops[7], Op::change(1, 100));
    }

    #[test]
    fn op_is_case_insensitive_and_trimmed() {
        let csv = "op,id,priority\n ADD , 3 , -7 \nPop,,\nChange,3,2\n";
        let ops = load_script_reader(csv.as_bytes()).unwrap();
        assert_eq!(ops, vec![Op::add(3, -7), Op::Pop, Op::change(3, 2)]);
    }

    #[test]
    fn pop_ignores_extra_fields() {
        let ops = load_script_reader("op,id,priority\npop,4,4\n".as_bytes()).unwrap();
        assert_eq!(ops, vec![Op::Pop]);
    }

    #[test]
    fn unknown_op_reports_row() {
        let csv = "op,id,priority\nadd,1,1\nremove,1,\n";
        match load_script_reader(csv.as_bytes()) {
            Err(ReplayError::Parse { row, msg }) => {
                assert_eq!(row, 2);
                assert!(msg.contains("remove"), "{msg}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_priority_reports_row() {
        let csv = "op,id,priority\nadd,1,1\nadd,2,1\nchange,2,\n";
        match load_script_reader(csv.as_bytes()) {
            Err(ReplayError::Parse { row, msg }) => {
                assert_eq!(row, 3);
                assert!(msg.contains("priority"), "{msg}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_rejected() {
        let err = load_script_reader("op,id,priority\nadd,,5\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("needs an id"), "{err}");
    }

    #[test]
    fn non_integer_field_is_csv_error() {
        let err = load_script_reader("op,id,priority\nadd,one,5\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReplayError::Csv(_)));
    }

    #[test]
    fn loads_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REFERENCE_CSV.as_bytes()).unwrap();
        let ops = crate::load_script_csv(file.path()).unwrap();
        assert_eq!(ops.len(), 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = crate::load_script_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ReplayError::Io(_)));
    }
}

// ── Replay runner ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use super::*;

    #[test]
    fn reference_script_pops_in_expected_order() {
        let ops = load_script_reader(REFERENCE_CSV.as_bytes()).unwrap();
        let mut replay = checked_replay();
        let mut rec = RecordingObserver::default();
        let summary = replay.run(&ops, &mut rec).unwrap();

        assert_eq!(
            rec.popped,
            vec![Task::new(5, 50), Task::new(4, 40), Task::new(1, 100), Task::new(3, 30)]
        );
        assert_eq!(
            summary,
            ReplaySummary {
                ops:            10,
                inserted:       5,
                duplicates:     0,
                changed:        1,
                missed_changes: 0,
                pops:           4,
                empty_pops:     0,
                remaining:      1,
            }
        );
        assert_eq!(replay.scheduler().peek(), Some(Task::new(2, 20)));
    }

    #[test]
    fn counts_ignored_ops() {
        let ops = [Op::Pop, Op::add(1, 5), Op::add(1, 9), Op::change(2, 3), Op::Pop, Op::Pop];
        let mut replay = checked_replay();
        let summary = replay.run(&ops, &mut NoopObserver).unwrap();
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.missed_changes, 1);
        assert_eq!(summary.pops, 1);
        assert_eq!(summary.empty_pops, 2);
        assert_eq!(summary.remaining, 0);
    }

    #[test]
    fn observer_sees_every_step() {
        #[derive(Default)]
        struct Steps {
            seen:  Vec<usize>,
            ended: bool,
        }
        impl ReplayObserver for Steps {
            fn on_add(&mut self, step: usize, _task: Task, _inserted: bool) {
                self.seen.push(step);
            }
            fn on_change(&mut self, step: usize, id: TaskId, old: Option<Priority>, new: Priority) {
                assert_eq!(id, TaskId(1));
                assert_eq!(old, Some(Priority(1)));
                assert_eq!(new, Priority(2));
                self.seen.push(step);
            }
            fn on_pop(&mut self, step: usize, _popped: Option<Task>) {
                self.seen.push(step);
            }
            fn on_end(&mut self, summary: &ReplaySummary) {
                assert_eq!(summary.ops, 3);
                self.ended = true;
            }
        }

        let mut obs = Steps::default();
        checked_replay().run(&[Op::add(1, 1), Op::change(1, 2), Op::Pop], &mut obs).unwrap();
        assert_eq!(obs.seen, vec![0, 1, 2]);
        assert!(obs.ended);
    }

    #[test]
    fn genuine_zero_task_is_not_an_empty_pop() {
        let mut replay = checked_replay();
        let mut rec = RecordingObserver::default();
        let summary = replay.run(&[Op::add(0, 0), Op::Pop, Op::Pop], &mut rec).unwrap();
        assert_eq!(rec.popped, vec![Task::SENTINEL]);
        assert_eq!(summary.pops, 1);
        assert_eq!(summary.empty_pops, 1);
    }

    #[test]
    fn drain_empties_in_priority_order() {
        let mut replay = checked_replay();
        replay
            .run(&[Op::add(1, 3), Op::add(2, 9), Op::add(3, -1), Op::add(4, 5)], &mut NoopObserver)
            .unwrap();
        let mut rec = RecordingObserver::default();
        let drained = replay.drain(&mut rec).unwrap();
        let ids: Vec<i64> = drained.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(rec.popped, drained);
        assert!(replay.scheduler().is_empty());
        assert_eq!(replay.summary().ops, 8);
    }

    #[test]
    fn drain_into_appends_every_popped_task() {
        let mut replay = checked_replay();
        replay.run(&[Op::add(1, 3), Op::add(2, 9), Op::add(3, 6)], &mut NoopObserver).unwrap();

        let mut out = vec![Task::new(99, 0)];
        let mut rec = RecordingObserver::default();
        replay.drain_into(&mut out, &mut rec).unwrap();

        assert_eq!(out, vec![Task::new(99, 0), Task::new(2, 9), Task::new(3, 6), Task::new(1, 3)]);
        assert_eq!(&out[1..], rec.popped.as_slice());
        assert_eq!(replay.summary().pops, out.len() - 1);
        assert!(replay.scheduler().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = SchedConfig { initial_capacity: usize::MAX, ..Default::default() };
        assert!(matches!(Replay::new(&cfg), Err(ReplayError::Config(_))));
    }
}

// ── Workload generator ────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        let cfg = WorkloadConfig::default();
        assert_eq!(generate_workload(&cfg, 9).unwrap(), generate_workload(&cfg, 9).unwrap());
        assert_ne!(generate_workload(&cfg, 9).unwrap(), generate_workload(&cfg, 10).unwrap());
    }

    #[test]
    fn respects_bounds_and_weights() {
        let cfg = WorkloadConfig {
            ops:           500,
            id_space:      4,
            priority_min:  -3,
            priority_max:  3,
            add_weight:    1,
            change_weight: 0,
            pop_weight:    0,
        };
        let ops = generate_workload(&cfg, 1).unwrap();
        assert_eq!(ops.len(), 500);
        for op in ops {
            let Op::Add { id, priority } = op else { panic!("unexpected {op}") };
            assert!((0..4).contains(&id.0));
            assert!((-3..=3).contains(&priority.0));
        }
    }

    #[test]
    fn rejects_bad_configs() {
        let base = WorkloadConfig::default();
        assert!(generate_workload(&WorkloadConfig { id_space: 0, ..base.clone() }, 1).is_err());
        assert!(
            generate_workload(&WorkloadConfig { priority_min: 5, priority_max: 4, ..base.clone() }, 1)
                .is_err()
        );
        let no_weight = WorkloadConfig { add_weight: 0, change_weight: 0, pop_weight: 0, ..base };
        assert!(generate_workload(&no_weight, 1).is_err());
    }

    #[test]
    fn generated_workloads_keep_invariants() {
        for seed in 0..8 {
            let cfg = WorkloadConfig { ops: 2_000, id_space: 32, ..Default::default() };
            let ops = generate_workload(&cfg, seed).unwrap();
            let mut replay = checked_replay();
            let summary = replay.run(&ops, &mut NoopObserver).unwrap();
            assert_eq!(summary.ops, 2_000);

            let drained = replay.drain(&mut NoopObserver).unwrap();
            assert!(drained.windows(2).all(|w| w[0].priority >= w[1].priority));
        }
    }
}
