//! CSV operation-script loader.
//!
//! # CSV format
//!
//! One row per operation, applied in file order.
//!
//! ```csv
//! op,id,priority
//! add,1,10
//! add,2,20
//! change,1,100
//! pop,,
//! ```
//!
//! **`op`** field (case-insensitive):
//!
//! | Value    | Needs `id` | Needs `priority` | Meaning                  |
//! |----------|------------|------------------|--------------------------|
//! | `add`    | yes        | yes              | `Op::Add`                |
//! | `change` | yes        | yes              | `Op::Change`             |
//! | `pop`    | no         | no               | `Op::Pop` (fields ignored) |
//!
//! Rows are numbered from 1 (the first row after the header) in parse errors.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Op, ReplayError, ReplayResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OpRecord {
    op:       String,
    id:       Option<i64>,
    priority: Option<i64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an operation script from a CSV file.
pub fn load_script_csv(path: &Path) -> ReplayResult<Vec<Op>> {
    let file = std::fs::File::open(path)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a `&[u8]`) or for
/// embedding scripts in a binary.
pub fn load_script_reader<R: Read>(reader: R) -> ReplayResult<Vec<Op>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut ops = Vec::new();

    for (i, result) in csv_reader.deserialize::<OpRecord>().enumerate() {
        let row = i + 1;
        let rec = result?;
        ops.push(parse_record(row, rec)?);
    }
    Ok(ops)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(row: usize, rec: OpRecord) -> ReplayResult<Op> {
    let kind = rec.op.to_ascii_lowercase();
    let build: fn(i64, i64) -> Op = match kind.as_str() {
        "pop"    => return Ok(Op::Pop),
        "add"    => Op::add,
        "change" => Op::change,
        other    => {
            return Err(ReplayError::Parse { row, msg: format!("unknown op `{other}`") });
        }
    };
    let id = rec
        .id
        .ok_or_else(|| ReplayError::Parse { row, msg: format!("`{kind}` needs an id") })?;
    let priority = rec
        .priority
        .ok_or_else(|| ReplayError::Parse { row, msg: format!("`{kind}` needs a priority") })?;
    Ok(build(id, priority))
}
