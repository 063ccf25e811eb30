//! Configuration for stock-crew runs

use crate::error::{Result, StockError};
use agent_utils::non_empty_var;
use agent_workflow::{ExecutionLimits, PipelineConfig};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const OUTPUT_DIR_VAR: &str = "STOCK_CREW_OUTPUT_DIR";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Settings for one stock-crew process
#[derive(Clone)]
pub struct StockCrewConfig {
    /// OpenAI API key (required)
    pub api_key: String,

    /// Base URL of the chat-completions endpoint
    pub api_base: String,

    /// Model used for every stage
    pub model: String,

    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,

    /// Max tokens per completion
    pub max_tokens: usize,

    /// HTTP timeout for a single model call
    pub request_timeout: Duration,

    /// Model-call ceiling per run
    pub max_iterations: usize,

    /// Wall-clock ceiling per run
    pub time_limit: Duration,

    /// Directory receiving `{ticker}_analysis.md`
    pub output_dir: PathBuf,

    /// Log per-stage progress
    pub verbose: bool,
}

impl Default for StockCrewConfig {
    fn default() -> Self {
        let limits = ExecutionLimits::default();
        Self {
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 4096,
            request_timeout: Duration::from_secs(120),
            max_iterations: limits.max_iterations,
            time_limit: limits.time_limit,
            output_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for StockCrewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StockCrewConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout", &self.request_timeout)
            .field("max_iterations", &self.max_iterations)
            .field("time_limit", &self.time_limit)
            .field("output_dir", &self.output_dir)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl StockCrewConfig {
    /// Create a new configuration builder
    pub fn builder() -> StockCrewConfigBuilder {
        StockCrewConfigBuilder::default()
    }

    /// Load from the process environment
    ///
    /// Call [`agent_utils::load_env_file`] first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key-value source
    ///
    /// Fails with [`StockError::ConfigError`] when `OPENAI_API_KEY` is unset or
    /// blank. Blank optional variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder().api_key(non_empty_var(&lookup, API_KEY_VAR)?);
        if let Some(base) = optional(API_BASE_VAR) {
            builder = builder.api_base(base);
        }
        if let Some(model) = optional(MODEL_VAR) {
            builder = builder.model(model);
        }
        if let Some(dir) = optional(OUTPUT_DIR_VAR) {
            builder = builder.output_dir(dir);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(StockError::ConfigError(format!("{API_KEY_VAR} is not set")));
        }

        if self.max_iterations == 0 {
            return Err(StockError::ConfigError(
                "max_iterations must be greater than 0".to_string(),
            ));
        }

        if self.time_limit.is_zero() {
            return Err(StockError::ConfigError(
                "time_limit must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(StockError::ConfigError(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        Ok(())
    }

    /// Model parameters for the pipeline
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }

    /// Ceilings for the pipeline
    pub fn limits(&self) -> ExecutionLimits {
        ExecutionLimits::new(self.max_iterations, self.time_limit)
    }
}

/// Builder for StockCrewConfig
#[derive(Default)]
pub struct StockCrewConfigBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<usize>,
    request_timeout: Option<Duration>,
    max_iterations: Option<usize>,
    time_limit: Option<Duration>,
    output_dir: Option<PathBuf>,
    verbose: bool,
}

impl StockCrewConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the model-call ceiling
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Set the wall-clock ceiling
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Enable verbose progress logging
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<StockCrewConfig> {
        let defaults = StockCrewConfig::default();

        let config = StockCrewConfig {
            api_key: self.api_key.unwrap_or(defaults.api_key),
            api_base: self.api_base.unwrap_or(defaults.api_base),
            model: self.model.unwrap_or(defaults.model),
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            time_limit: self.time_limit.unwrap_or(defaults.time_limit),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            verbose: self.verbose,
        };

        config.validate()?;
        Ok(config)
    }
}
