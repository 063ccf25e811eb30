//! Error types for stock-crew

use agent_llm::LLMError;
use agent_prompt::PromptError;
use agent_utils::EnvError;
use std::fmt;
use thiserror::Error;

/// Stock-crew specific errors
#[derive(Debug, Error)]
pub enum StockError {
    /// Missing credential or invalid settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ticker rejected before any model call
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// A task template failed to parse or render
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The model provider could not be set up
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    /// The pipeline run failed
    #[error(transparent)]
    Pipeline(#[from] agent_core::Error),
}

/// Result type alias for stock-crew operations
pub type Result<T> = std::result::Result<T, StockError>;

/// Coarse classification of every failure the crew can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Validation,
    ModelCall,
    LimitExceeded,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "ConfigurationError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::ModelCall => "ModelCallError",
            ErrorKind::LimitExceeded => "LimitExceededError",
            ErrorKind::Io => "IOError",
        };
        f.write_str(name)
    }
}

impl StockError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StockError::ConfigError(_) => ErrorKind::Configuration,
            StockError::InvalidSymbol(_) | StockError::Prompt(_) => ErrorKind::Validation,
            StockError::Llm(LLMError::ConfigurationError(_)) => ErrorKind::Configuration,
            StockError::Llm(_) => ErrorKind::ModelCall,
            StockError::Pipeline(err) => match err {
                agent_core::Error::Configuration(_) => ErrorKind::Configuration,
                agent_core::Error::Validation(_) => ErrorKind::Validation,
                agent_core::Error::ModelCall { .. } => ErrorKind::ModelCall,
                agent_core::Error::LimitExceeded { .. } => ErrorKind::LimitExceeded,
                agent_core::Error::Io { .. } => ErrorKind::Io,
            },
        }
    }

    /// Pipeline stage the error is attributed to, if any
    pub fn stage(&self) -> Option<usize> {
        match self {
            StockError::Pipeline(err) => err.stage(),
            _ => None,
        }
    }
}

impl From<EnvError> for StockError {
    fn from(err: EnvError) -> Self {
        StockError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Limit;
    use std::time::Duration;

    #[test]
    fn test_error_display() {
        let err = StockError::InvalidSymbol("ticker must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: ticker must not be empty");

        let err = StockError::from(EnvError::Missing("OPENAI_API_KEY".to_string()));
        assert_eq!(
            err.to_string(),
            "Configuration error: OPENAI_API_KEY is not set"
        );
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err = StockError::from(agent_core::Error::ModelCall {
            stage: 2,
            task: "recommendation".to_string(),
            role: "Investment Advisor".to_string(),
            message: "HTTP 503".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "Model call failed at stage 2 (recommendation, Investment Advisor): HTTP 503"
        );
        assert_eq!(err.kind(), ErrorKind::ModelCall);
        assert_eq!(err.stage(), Some(2));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            StockError::ConfigError(String::new()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            StockError::Llm(LLMError::ConfigurationError("no key".to_string())).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            StockError::Llm(LLMError::AuthenticationFailed).kind(),
            ErrorKind::ModelCall
        );

        let limit = StockError::from(agent_core::Error::LimitExceeded {
            limit: Limit::Time(Duration::from_secs(300)),
            stage: 0,
            task: "research".to_string(),
        });
        assert_eq!(limit.kind(), ErrorKind::LimitExceeded);
        assert_eq!(limit.kind().to_string(), "LimitExceededError");

        let io = StockError::from(agent_core::Error::Io {
            path: "AAPL_analysis.md".into(),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(io.kind(), ErrorKind::Io);
        assert_eq!(io.stage(), None);
    }
}
