use std::time::Duration;
use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum PerfError {
    #[error("config error: {0}")]
    Config(String),
}

/// Why a single metric could not be sampled on this tick.
///
/// Always scoped to one metric; the next tick retries from scratch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("OS query failed: {0}")]
    Os(String),

    #[error("cannot launch '{program}': {reason}")]
    Launch { program: String, reason: String },

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("unparseable output: {0:?}")]
    Parse(String),
}

pub type Result<T, E = PerfError> = std::result::Result<T, E>;
