use ps_core::PsError;
use ps_queue::InvariantError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("script row {row}: {msg}")]
    Parse { row: usize, msg: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invariant broken after step {step}: {source}")]
    Invariant {
        step:   usize,
        source: InvariantError,
    },

    #[error(transparent)]
    Config(#[from] PsError),
}

pub type ReplayResult<T> = Result<T, ReplayError>;
