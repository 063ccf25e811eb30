//! Prompt composition for pipeline stages
//!
//! Each stage sends two messages: a system prompt carrying the actor's persona
//! and a user message carrying the task plus every prior output of the run.

use crate::TaskDescriptor;
use agent_core::{Actor, ContextBuffer};
use agent_prompt::PromptBuilder;

/// Persona prompt for `actor`
pub fn system_prompt(actor: &Actor) -> String {
    PromptBuilder::new()
        .text(format!("You are {}. {}", actor.role(), actor.backstory()))
        .newline()
        .text(format!("Your personal goal is: {}", actor.goal()))
        .build()
}

/// User message for `task`, including the accumulated `context`
///
/// Prior outputs appear in production order, each under a heading naming the
/// task and role that produced it. Outputs are inserted verbatim.
pub fn task_prompt(task: &TaskDescriptor, context: &ContextBuffer) -> String {
    PromptBuilder::new()
        .text(format!("Current Task: {}", task.description()))
        .blank_line()
        .when(
            !task.expected_output().is_empty(),
            format!(
                "This is the expected criteria for your final answer: {}\n",
                task.expected_output()
            ),
        )
        .text("You MUST return the actual complete content as the final answer, not a summary.")
        .when(
            !context.is_empty(),
            "\n\nThis is the context you're working with:\n",
        )
        .each(context.entries(), |builder, entry| {
            builder
                .section(format!("{} ({})", entry.task, entry.role))
                .text(entry.output.as_str())
                .newline()
        })
        .build()
}
