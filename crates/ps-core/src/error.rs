//! Shared error type.
//!
//! The scheduler itself never fails; these errors come from configuration
//! and from the tooling around it.  Sub-crates wrap `PsError` as one variant
//! of their own error enums.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ps-*` crates.
pub type PsResult<T> = Result<T, PsError>;
