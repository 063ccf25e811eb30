//! Ordered context buffer for pipeline runs
//!
//! The [`ContextBuffer`] replaces implicit "pass prior outputs forward" magic
//! with an explicit, ordered list. Each finished task appends one
//! [`ContextEntry`]; every later task sees all entries in the order they were
//! produced.

use serde::{Deserialize, Serialize};

/// Output of one finished task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    /// Name of the task that produced the output
    pub task: String,
    /// Role of the actor the task was bound to
    pub role: String,
    /// Text returned by the model
    pub output: String,
}

/// Accumulated outputs of the tasks completed so far in one run
///
/// # Example
///
/// ```
/// use agent_core::ContextBuffer;
///
/// let mut buffer = ContextBuffer::new();
/// buffer.push("research", "Market Researcher", "AAPL is up.");
/// buffer.push("analysis", "Financial Analyst", "Healthy balance sheet.");
///
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.last_output(), Some("Healthy balance sheet."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBuffer {
    entries: Vec<ContextEntry>,
}

impl ContextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the output of a finished task
    pub fn push(
        &mut self,
        task: impl Into<String>,
        role: impl Into<String>,
        output: impl Into<String>,
    ) {
        self.entries.push(ContextEntry {
            task: task.into(),
            role: role.into(),
            output: output.into(),
        });
    }

    /// All entries in production order
    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    /// Iterate over the output texts in production order
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.output.as_str())
    }

    /// Output of the task with the given name, if it has run
    pub fn output_of(&self, task: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.task == task)
            .map(|e| e.output.as_str())
    }

    /// Output of the most recently finished task
    pub fn last_output(&self) -> Option<&str> {
        self.entries.last().map(|e| e.output.as_str())
    }

    /// Number of finished tasks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no task has finished yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
