//! Core records for stock-crew
//!
//! This crate defines the value types shared by every stage of a pipeline run:
//! the [`Actor`] persona, the [`ContextBuffer`] that carries prior task outputs
//! forward, and the [`Error`] kinds a run can fail with.

pub mod actor;
pub mod context;
pub mod error;

pub use actor::Actor;
pub use context::{ContextBuffer, ContextEntry};
pub use error::{Error, Limit, Result};
