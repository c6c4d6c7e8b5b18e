//! replay — run an operation script against the prio_sched scheduler.
//!
//! ```text
//! replay                      built-in reference trace
//! replay TRACE.csv            ops from a CSV file (op,id,priority)
//! replay --random N [SEED]    N synthetic ops
//! ```
//!
//! Every pop is printed as one JSON line, followed by the summary.  Set
//! `RUST_LOG=debug` to log each op as it is applied.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use ps_core::{SchedConfig, Task};
use ps_replay::{
    LogObserver, Op, Replay, ReplayObserver, ReplaySummary, WorkloadConfig, generate_workload,
    load_script_csv, load_script_reader,
};

// ── Constants ─────────────────────────────────────────────────────────────────

// Five tasks, two pops, a priority raise, two more pops.
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

// ── Observer: log, then print pops as JSON lines ─────────────────────────────

struct PrintingObserver<W: Write> {
    log:    LogObserver,
    out:    W,
    /// First write error, reported after the run.
    error:  Option<io::Error>,
}

impl<W: Write> PrintingObserver<W> {
    fn new(out: W) -> Self {
        Self { log: LogObserver, out, error: None }
    }

    fn print(&mut self, task: &Task) {
        if self.error.is_some() {
            return;
        }
        let line = serde_json::to_string(task).map_err(io::Error::from);
        if let Err(e) = line.and_then(|l| writeln!(self.out, "{l}")) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ReplayObserver for PrintingObserver<W> {
    fn on_add(&mut self, step: usize, task: Task, inserted: bool) {
        self.log.on_add(step, task, inserted);
    }

    fn on_change(
        &mut self,
        step: usize,
        id:   ps_core::TaskId,
        old:  Option<ps_core::Priority>,
        new:  ps_core::Priority,
    ) {
        self.log.on_change(step, id, old, new);
    }

    fn on_pop(&mut self, step: usize, popped: Option<Task>) {
        self.log.on_pop(step, popped);
        if let Some(task) = popped {
            self.print(&task);
        }
    }

    fn on_end(&mut self, summary: &ReplaySummary) {
        self.log.on_end(summary);
    }
}

// ── Argument handling ─────────────────────────────────────────────────────────

fn load_ops(args: &[String], default_seed: u64) -> Result<Vec<Op>> {
    match args {
        [] => Ok(load_script_reader(REFERENCE_CSV.as_bytes())?),
        [flag, rest @ ..] if flag == "--random" => {
            let (ops, seed) = match rest {
                [n]       => (n.parse::<usize>()?, default_seed),
                [n, seed] => (n.parse::<usize>()?, seed.parse::<u64>()?),
                _         => bail!("usage: replay --random N [SEED]"),
            };
            let cfg = WorkloadConfig { ops, ..Default::default() };
            info!("generating {ops} ops with seed {seed}");
            Ok(generate_workload(&cfg, seed)?)
        }
        [path] => load_script_csv(Path::new(path))
            .with_context(|| format!("loading script {path}")),
        _ => bail!("usage: replay [TRACE.csv | --random N [SEED]]"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = SchedConfig::default();
    let ops = load_ops(&args, config.seed)?;
    config.initial_capacity = ops.len().min(1 << 16);

    let mut replay = Replay::new(&config)?;
    let mut obs = PrintingObserver::new(io::stdout().lock());

    let t0 = Instant::now();
    let summary = replay.run(&ops, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.error.take() {
        return Err(e).context("writing pops");
    }

    writeln!(obs.out, "{}", serde_json::to_string(&summary)?)?;
    info!("replay finished in {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    Ok(())
}
