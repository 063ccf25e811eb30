//! Sequential pipeline runner
//!
//! For each task in order the runner:
//! 1. Checks the iteration and time ceilings
//! 2. Sends the actor's persona, the task and all prior outputs to the model
//! 3. Appends the returned text to the run's context buffer
//!
//! After the last task the final output is persisted and returned. The first
//! error of any kind aborts the run.

use crate::limits::Budget;
use crate::{ExecutionLimits, PipelineRun, RunState, TaskDescriptor, output, prompt};
use agent_core::{ContextBuffer, Error, Result};
use agent_llm::{CompletionRequest, LLMProvider, Message, StopReason};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Model parameters applied to every call of a run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Model to use
    pub model: String,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// Temperature
    pub temperature: Option<f32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 4096,
            temperature: Some(0.7),
        }
    }
}

/// Runs task lists against one model provider
///
/// A `Pipeline` holds no per-run state and can be shared across concurrent
/// runs through an `Arc`.
pub struct Pipeline {
    provider: Arc<dyn LLMProvider>,
    config: PipelineConfig,
    limits: ExecutionLimits,
}

impl Pipeline {
    /// Create a new pipeline
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        config: PipelineConfig,
        limits: ExecutionLimits,
    ) -> Self {
        Self {
            provider,
            config,
            limits,
        }
    }

    /// Create a builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn limits(&self) -> ExecutionLimits {
        self.limits
    }

    /// Run `tasks` for `subject` and return the final task's output
    pub async fn run(
        &self,
        subject: impl Into<String>,
        tasks: Vec<TaskDescriptor>,
    ) -> Result<String> {
        let mut run = PipelineRun::new(subject, tasks)?;
        self.execute(&mut run).await
    }

    /// Execute a pending run to completion
    ///
    /// On success the run ends `Completed` and the final output has been
    /// written to the last task's output file, if any. On failure it ends
    /// `Failed` with the failing stage, its context is discarded and no file
    /// is written.
    #[instrument(skip_all, fields(run_id = %run.id(), subject = %run.subject()))]
    pub async fn execute(&self, run: &mut PipelineRun) -> Result<String> {
        if run.state != RunState::Pending {
            return Err(Error::Validation(format!(
                "run {} cannot be executed from state {}",
                run.id(),
                run.state
            )));
        }

        info!(
            "Starting pipeline: {} task(s), model {}",
            run.tasks.len(),
            self.config.model
        );
        run.started_at = Some(Utc::now());

        let result = self.drive(run).await;
        run.finished_at = Some(Utc::now());

        match result {
            Ok(output) => {
                run.state.transition(RunState::Completed)?;
                info!(
                    "Pipeline completed: {} model call(s), {} tokens",
                    run.model_calls,
                    run.usage.total()
                );
                Ok(output)
            }
            Err(e) => {
                // Pending and Running may both fail
                run.state = RunState::Failed {
                    task_index: run.state.task_index(),
                };
                run.context.clear();
                warn!("Pipeline failed: {}", e);
                Err(e)
            }
        }
    }

    async fn drive(&self, run: &mut PipelineRun) -> Result<String> {
        let mut budget = Budget::start(self.limits);
        let total = run.tasks.len();

        for (index, task) in run.tasks.iter().enumerate() {
            run.state.transition(RunState::Running { task_index: index })?;
            let role = task.actor().role();
            info!("Stage {}/{}: {} ({})", index + 1, total, task.name(), role);

            let remaining = budget.begin_call(index, task.name())?;
            run.model_calls = budget.calls();

            let request = self.build_request(task, &run.context);
            let call = self.provider.complete(request);
            let response = match tokio::time::timeout(remaining, call).await {
                Ok(Ok(response)) => response,
                Ok(Err(e)) => return Err(model_call_error(index, task, e.to_string())),
                Err(_) => return Err(budget.time_exceeded(index, task.name())),
            };

            run.usage += response.usage;
            debug!(
                "Stage {} tokens: input={}, output={}, stop_reason={:?}",
                index,
                response.usage.input_tokens,
                response.usage.output_tokens,
                response.stop_reason
            );
            match response.stop_reason {
                StopReason::ContentFilter => {
                    return Err(model_call_error(
                        index,
                        task,
                        "response withheld by content filter",
                    ));
                }
                StopReason::MaxTokens => {
                    warn!("Stage {} output was truncated at max_tokens", index);
                }
                _ => {}
            }

            let text = response
                .message
                .text()
                .ok_or_else(|| model_call_error(index, task, "response contained no text"))?;

            run.context.push(task.name(), role, text);
        }

        let output = run
            .context
            .last_output()
            .map(str::to_string)
            .ok_or_else(|| Error::Validation("pipeline produced no output".to_string()))?;

        if let Some(path) = run.output_file() {
            output::write_atomic(path, &output).await?;
            info!("Saved output to {}", path.display());
        }

        Ok(output)
    }

    fn build_request(&self, task: &TaskDescriptor, context: &ContextBuffer) -> CompletionRequest {
        let mut builder = CompletionRequest::builder(&self.config.model)
            .system(prompt::system_prompt(task.actor()))
            .add_message(Message::user(prompt::task_prompt(task, context)))
            .max_tokens(self.config.max_tokens);

        if let Some(temperature) = self.config.temperature {
            builder = builder.temperature(temperature);
        }

        builder.build()
    }
}

fn model_call_error(stage: usize, task: &TaskDescriptor, message: impl Into<String>) -> Error {
    Error::ModelCall {
        stage,
        task: task.name().to_string(),
        role: task.actor().role().to_string(),
        message: message.into(),
    }
}

/// Builder for [`Pipeline`]
pub struct PipelineBuilder {
    provider: Option<Arc<dyn LLMProvider>>,
    config: PipelineConfig,
    limits: ExecutionLimits,
}

impl PipelineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            provider: None,
            config: PipelineConfig::default(),
            limits: ExecutionLimits::default(),
        }
    }

    /// Set the LLM provider
    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the full model configuration
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set both ceilings
    pub fn limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = Some(temperature);
        self
    }

    /// Set the model-call ceiling
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.limits.max_iterations = max;
        self
    }

    /// Set the wall-clock ceiling
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.limits.time_limit = limit;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<Pipeline> {
        let provider = self
            .provider
            .ok_or_else(|| Error::Configuration("Provider not set".to_string()))?;
        self.limits.validate()?;

        Ok(Pipeline::new(provider, self.config, self.limits))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
