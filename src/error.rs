//! Error types for Realty Outreach.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// LLM provider errors.
///
/// These are infrastructure failures — the generation loop never retries
/// them. Auth-class failures get their own variant so callers can log a
/// credential diagnostic before propagating.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Authentication failed for provider {provider}: {reason}")]
    AuthFailed { provider: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether this error looks like a credential/authentication problem.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthFailed { .. })
    }
}

/// Pipeline-stage errors.
///
/// Taxonomy:
/// - `MissingInput` — caller fault, caught before any I/O.
/// - `WeatherRequired` — the weather fetch failed while the deployment
///   policy marks weather as mandatory.
/// - `Llm` — infrastructure failure from the model invocation, terminal.
/// - `RetriesExhausted` — every generation attempt failed content
///   validation; carries the last attempt's reasons.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{field} is required for email generation")]
    MissingInput { field: &'static str },

    #[error("Weather is required by policy but unavailable for {city}, {state}")]
    WeatherRequired { city: String, state: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Email failed validation after {attempts} attempts: {}", reasons.join("; "))]
    RetriesExhausted { attempts: u32, reasons: Vec<String> },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
