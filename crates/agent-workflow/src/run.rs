//! Per-run execution record

use crate::{RunState, TaskDescriptor};
use agent_core::{ContextBuffer, Error, Result};
use agent_llm::TokenUsage;
use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

/// One execution of a pipeline over an ordered task list
///
/// A run is created `Pending`, executed once by
/// [`Pipeline::execute`](crate::Pipeline::execute), and afterwards kept for
/// inspection. It owns its context buffer, so independent runs share nothing.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    id: Uuid,
    subject: String,
    pub(crate) tasks: Vec<TaskDescriptor>,
    pub(crate) context: ContextBuffer,
    pub(crate) state: RunState,
    pub(crate) model_calls: usize,
    pub(crate) usage: TokenUsage,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) finished_at: Option<DateTime<Utc>>,
}

impl PipelineRun {
    /// Create a pending run
    ///
    /// `subject` labels the run in logs (the ticker for stock-crew). An empty
    /// task list is rejected.
    pub fn new(subject: impl Into<String>, tasks: Vec<TaskDescriptor>) -> Result<Self> {
        if tasks.is_empty() {
            return Err(Error::Validation(
                "a pipeline run needs at least one task".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            tasks,
            context: ContextBuffer::new(),
            state: RunState::Pending,
            model_calls: 0,
            usage: TokenUsage::default(),
            started_at: None,
            finished_at: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.tasks
    }

    /// Outputs of the tasks finished so far
    ///
    /// Cleared when the run fails, since partial outputs are never kept.
    pub fn context(&self) -> &ContextBuffer {
        &self.context
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Number of model calls issued
    pub fn model_calls(&self) -> usize {
        self.model_calls
    }

    /// Token usage summed over every call
    pub fn usage(&self) -> TokenUsage {
        self.usage
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Wall-clock duration of a finished run
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    /// Destination of the final task's output, if it has one
    pub fn output_file(&self) -> Option<&Path> {
        self.tasks.last().and_then(TaskDescriptor::output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Actor;
    use std::sync::Arc;

    fn tasks() -> Vec<TaskDescriptor> {
        let actor = Arc::new(Actor::new("R", "G", "B"));
        vec![
            TaskDescriptor::builder("a", Arc::clone(&actor))
                .description("first")
                .build()
                .unwrap(),
            TaskDescriptor::builder("b", actor)
                .description("second")
                .output_file("out.md")
                .build()
                .unwrap(),
        ]
    }

    #[test]
    fn test_new_run_is_pending() {
        let run = PipelineRun::new("NVDA", tasks()).unwrap();

        assert_eq!(run.subject(), "NVDA");
        assert_eq!(run.state(), RunState::Pending);
        assert!(run.context().is_empty());
        assert_eq!(run.model_calls(), 0);
        assert_eq!(run.usage().total(), 0);
        assert_eq!(run.elapsed(), None);
        assert_eq!(run.output_file(), Some(Path::new("out.md")));
    }

    #[test]
    fn test_runs_have_distinct_ids() {
        let a = PipelineRun::new("X", tasks()).unwrap();
        let b = PipelineRun::new("X", tasks()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_empty_task_list_rejected() {
        assert!(matches!(
            PipelineRun::new("X", Vec::new()),
            Err(Error::Validation(_))
        ));
    }
}
