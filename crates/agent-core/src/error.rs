//! Error types for pipeline runs

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// The ceiling that a run crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Maximum number of model calls per run
    Iterations(usize),
    /// Maximum wall-clock time per run
    Time(Duration),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Iterations(n) => write!(f, "iteration limit of {n} model calls"),
            Limit::Time(d) => write!(f, "time limit of {}s", d.as_secs_f64()),
        }
    }
}

/// Error type for pipeline runs
///
/// Every variant is fatal to the run it occurs in. Stage-level variants carry
/// the zero-based stage index, the task name and (for model failures) the actor
/// role so the caller can tell which step failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any work was done
    #[error("Validation error: {0}")]
    Validation(String),

    /// The language-model call for a stage failed
    #[error("Model call failed at stage {stage} ({task}, {role}): {message}")]
    ModelCall {
        stage: usize,
        task: String,
        role: String,
        message: String,
    },

    /// An iteration or time ceiling was crossed
    #[error("Run aborted at stage {stage} ({task}): exceeded {limit}")]
    LimitExceeded {
        limit: Limit,
        stage: usize,
        task: String,
    },

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Stage index the error is attributed to, if any
    pub fn stage(&self) -> Option<usize> {
        match self {
            Error::ModelCall { stage, .. } | Error::LimitExceeded { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
