//! Environment configuration utilities
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file. Variables already present in the process always take
//! precedence over values from the file.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading environment configuration
#[derive(Debug, Error)]
pub enum EnvError {
    /// An explicitly requested env file could not be loaded
    #[error("Failed to load env file {}: {detail}", path.display())]
    EnvFile { path: PathBuf, detail: String },

    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(String),
}

/// Where environment values were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    /// Only the process environment
    Process,
    /// The process environment plus the given file
    File(PathBuf),
}

/// Load a `.env` file into the process environment
///
/// With an explicit `path`, failing to read it is an error. Without one, a
/// `.env` in the working directory (or a parent) is loaded when present and
/// silently skipped otherwise.
pub fn load_env_file(path: Option<&Path>) -> Result<EnvSource, EnvError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|e| EnvError::EnvFile {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
            debug!("Loaded environment from {}", path.display());
            Ok(EnvSource::File(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => {
                debug!("Loaded environment from {}", found.display());
                Ok(EnvSource::File(found))
            }
            Err(_) => Ok(EnvSource::Process),
        },
    }
}

/// Look up a variable that must be present and non-blank
///
/// `lookup` abstracts over the process environment so callers can resolve
/// configuration from any key-value source.
pub fn non_empty_var<F>(lookup: F, key: &str) -> Result<String, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| EnvError::Missing(key.to_string()))
}
