//! Task descriptors

use agent_core::{Actor, Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A unit of work bound to one actor
///
/// Descriptors are immutable once built. The `name` is a short identifier used
/// in logs, errors and context headings; the description and expected output
/// go into the model prompt verbatim.
///
/// # Example
///
/// ```
/// use agent_core::Actor;
/// use agent_workflow::TaskDescriptor;
/// use std::sync::Arc;
///
/// let advisor = Arc::new(Actor::new("Investment Advisor", "Advise", "Seasoned"));
/// let task = TaskDescriptor::builder("recommendation", advisor)
///     .description("Recommend a position in AAPL.")
///     .expected_output("A detailed report.")
///     .output_file("AAPL_analysis.md")
///     .build()
///     .unwrap();
///
/// assert_eq!(task.actor().role(), "Investment Advisor");
/// assert!(task.output_file().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
    name: String,
    description: String,
    expected_output: String,
    actor: Arc<Actor>,
    output_file: Option<PathBuf>,
}

impl TaskDescriptor {
    /// Create a builder for a task bound to `actor`
    pub fn builder(name: impl Into<String>, actor: Arc<Actor>) -> TaskDescriptorBuilder {
        TaskDescriptorBuilder::new(name, actor)
    }

    /// Short task identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the actor is asked to do
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Hint describing the expected answer
    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }

    /// The actor the task is bound to
    pub fn actor(&self) -> &Arc<Actor> {
        &self.actor
    }

    /// Where the task's output is persisted, if anywhere
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}

/// Builder for [`TaskDescriptor`]
pub struct TaskDescriptorBuilder {
    name: String,
    actor: Arc<Actor>,
    description: String,
    expected_output: String,
    output_file: Option<PathBuf>,
}

impl TaskDescriptorBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>, actor: Arc<Actor>) -> Self {
        Self {
            name: name.into(),
            actor,
            description: String::new(),
            expected_output: String::new(),
            output_file: None,
        }
    }

    /// Set the task description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the expected-output hint
    pub fn expected_output(mut self, expected_output: impl Into<String>) -> Self {
        self.expected_output = expected_output.into();
        self
    }

    /// Persist the task's output at `path`
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Build the descriptor
    ///
    /// Fails with [`Error::Validation`] when the name or description is blank.
    pub fn build(self) -> Result<TaskDescriptor> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("task name must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(format!(
                "task '{}' has an empty description",
                self.name
            )));
        }

        Ok(TaskDescriptor {
            name: self.name,
            description: self.description,
            expected_output: self.expected_output,
            actor: self.actor,
            output_file: self.output_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Arc<Actor> {
        Arc::new(Actor::new("Researcher", "Research", "Curious"))
    }

    #[test]
    fn test_builder() {
        let task = TaskDescriptor::builder("research", actor())
            .description("Research TSLA")
            .expected_output("Notes")
            .build()
            .unwrap();

        assert_eq!(task.name(), "research");
        assert_eq!(task.description(), "Research TSLA");
        assert_eq!(task.expected_output(), "Notes");
        assert_eq!(task.output_file(), None);
    }

    #[test]
    fn test_empty_description_rejected() {
        let result = TaskDescriptor::builder("research", actor()).build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = TaskDescriptor::builder(" ", actor())
            .description("x")
            .build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_actor_is_shared() {
        let actor = actor();
        let task = TaskDescriptor::builder("a", Arc::clone(&actor))
            .description("x")
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(task.actor(), &actor));
    }
}
