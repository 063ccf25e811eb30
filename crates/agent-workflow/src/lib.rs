//! Sequential pipeline runner for stock-crew
//!
//! A [`Pipeline`] executes an ordered list of [`TaskDescriptor`]s, one model
//! call per task, forwarding every finished task's output to all later tasks
//! through the run's [`ContextBuffer`](agent_core::ContextBuffer). The final
//! task's output is persisted atomically when the task names an output file.
//!
//! Runs are bounded by [`ExecutionLimits`]: crossing the model-call ceiling or
//! the wall-clock ceiling aborts the run. Any failure is fatal, nothing is
//! retried, and a failed run never writes its output file.

pub mod limits;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod run;
pub mod state;
pub mod task;

// Re-export for convenience
pub use limits::ExecutionLimits;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineConfig};
pub use run::PipelineRun;
pub use state::RunState;
pub use task::{TaskDescriptor, TaskDescriptorBuilder};
