//! Model client errors
//!
//! Any of these raised while a stage is waiting on the model fails that stage
//! and ends the run. `ConfigurationError` is the one variant that surfaces
//! before a run starts.

use thiserror::Error;

/// Result type for model client calls
pub type Result<T> = std::result::Result<T, LLMError>;

#[derive(Error, Debug)]
pub enum LLMError {
    /// Transport failure or a non-success status without a more specific mapping
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// HTTP 401; the credential was rejected
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// HTTP 429. Not retried, the stage fails
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// HTTP 400, usually an oversized prompt or a bad parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP 404 for the configured model name
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[cfg(feature = "openai")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The body could not be parsed or carried no choice
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Failure raised by a provider implementation outside status mapping
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Client could not be constructed, e.g. an empty API key
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
