//! Run state machine
//!
//! ```text
//! Pending -> Running(0) -> Running(1) -> ... -> Completed
//!    \            \
//!     `------------`---------------------------> Failed
//! ```

use agent_core::{Error, Result};
use std::fmt;

/// Lifecycle of a [`PipelineRun`](crate::PipelineRun)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Created, not yet started
    #[default]
    Pending,
    /// Executing the task at `task_index`
    Running { task_index: usize },
    /// Every task finished and the output was persisted
    Completed,
    /// Aborted; `task_index` is the stage that failed, if one had started
    Failed { task_index: Option<usize> },
}

impl RunState {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed { .. })
    }

    /// Stage currently executing, if any
    pub fn task_index(&self) -> Option<usize> {
        match self {
            RunState::Running { task_index } => Some(*task_index),
            RunState::Failed { task_index } => *task_index,
            _ => None,
        }
    }

    fn can_transition_to(&self, next: &RunState) -> bool {
        match (self, next) {
            (RunState::Pending, RunState::Running { task_index: 0 }) => true,
            (RunState::Running { task_index: a }, RunState::Running { task_index: b }) => {
                *b == a + 1
            }
            (RunState::Running { .. }, RunState::Completed) => true,
            (RunState::Pending | RunState::Running { .. }, RunState::Failed { .. }) => true,
            _ => false,
        }
    }

    /// Move to `next`, rejecting transitions the machine does not allow
    pub fn transition(&mut self, next: RunState) -> Result<()> {
        if !self.can_transition_to(&next) {
            return Err(Error::Validation(format!(
                "illegal run state transition: {self} -> {next}"
            )));
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Pending => write!(f, "PENDING"),
            RunState::Running { task_index } => write!(f, "RUNNING({task_index})"),
            RunState::Completed => write!(f, "COMPLETED"),
            RunState::Failed { task_index: Some(i) } => write!(f, "FAILED({i})"),
            RunState::Failed { task_index: None } => write!(f, "FAILED"),
        }
    }
}
