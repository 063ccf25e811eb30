//! Stock crew facade
//!
//! Wires the role registry, the task list and a pipeline together so a caller
//! only supplies a ticker.

use crate::agents::RoleRegistry;
use crate::config::StockCrewConfig;
use crate::error::Result;
use crate::tasks::{build_tasks, output_path_for};
use agent_llm::{LLMProvider, TokenUsage};
use agent_llm::providers::{OpenAIConfig, OpenAIProvider};
use agent_workflow::{Pipeline, PipelineRun};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Outcome of a successful analysis
#[derive(Debug, Clone)]
pub struct CrewReport {
    pub run_id: Uuid,
    pub ticker: String,
    /// File holding `report`
    pub output_path: PathBuf,
    /// Final recommendation text, identical to the file contents
    pub report: String,
    pub model_calls: usize,
    pub usage: TokenUsage,
    pub elapsed: Option<chrono::Duration>,
}

/// Runs the three-stage stock research pipeline
pub struct StockCrew {
    registry: RoleRegistry,
    pipeline: Pipeline,
    output_dir: PathBuf,
}

impl StockCrew {
    /// Create a crew backed by the OpenAI-compatible provider
    pub fn from_config(config: &StockCrewConfig) -> Result<Self> {
        Self::from_config_with(config, |config| {
            let openai = OpenAIConfig::new(config.api_key.clone())
                .with_api_base(config.api_base.clone())
                .with_timeout(config.request_timeout.as_secs());
            let provider: Arc<dyn LLMProvider> = Arc::new(OpenAIProvider::with_config(openai)?);
            Ok(provider)
        })
    }

    /// Create a crew with a custom provider factory
    ///
    /// The configuration is validated first; `make_provider` is only called
    /// once it holds a credential and sane limits.
    pub fn from_config_with<F>(config: &StockCrewConfig, make_provider: F) -> Result<Self>
    where
        F: FnOnce(&StockCrewConfig) -> Result<Arc<dyn LLMProvider>>,
    {
        config.validate()?;
        let provider = make_provider(config)?;
        Self::new(provider, config)
    }

    /// Create a crew around an existing provider
    pub fn new(provider: Arc<dyn LLMProvider>, config: &StockCrewConfig) -> Result<Self> {
        let pipeline = Pipeline::builder()
            .provider(provider)
            .config(config.pipeline_config())
            .limits(config.limits())
            .build()?;

        Ok(Self {
            registry: RoleRegistry::new(),
            pipeline,
            output_dir: config.output_dir.clone(),
        })
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Where the report for `ticker` is written
    pub fn output_path(&self, ticker: &str) -> PathBuf {
        output_path_for(&self.output_dir, ticker)
    }

    /// Research, analyze and advise on `ticker`, writing the report file
    #[instrument(skip(self))]
    pub async fn analyze(&self, ticker: &str) -> Result<CrewReport> {
        let tasks = build_tasks(&self.registry, ticker, &self.output_dir)?;
        let mut run = PipelineRun::new(ticker, tasks)?;

        let report = self.pipeline.execute(&mut run).await?;
        info!(
            "Analysis of {} finished with {} model call(s)",
            ticker,
            run.model_calls()
        );

        Ok(CrewReport {
            run_id: run.id(),
            ticker: ticker.to_string(),
            output_path: self.output_path(ticker),
            report,
            model_calls: run.model_calls(),
            usage: run.usage(),
            elapsed: run.elapsed(),
        })
    }
}
