//! Shared utilities for stock-crew
//!
//! This crate provides common functionality used across the workspace:
//! logging setup and environment configuration loading.

pub mod config;
pub mod logging;

pub use config::{EnvError, EnvSource, load_env_file, non_empty_var};
pub use logging::{default_filter, init_tracing};
