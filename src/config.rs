//! Configuration types.

use crate::error::ConfigError;

/// Whether a missing weather summary is recoverable or terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherPolicy {
    /// Weather fetch failures degrade to fallback prompt text.
    #[default]
    Optional,
    /// Weather fetch failures abort the pipeline, and the validator
    /// requires a temperature figure in the generated body.
    Required,
}

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum generation attempts before the pipeline gives up.
    pub max_attempts: u32,
    /// Hard word ceiling enforced by post-processing.
    pub max_words: usize,
    /// Whether weather is mandatory for this deployment.
    pub weather_policy: WeatherPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            max_words: 300,
            weather_policy: WeatherPolicy::Optional,
        }
    }
}

impl PipelineConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `OUTREACH_MAX_ATTEMPTS` — generation attempt bound
    /// - `OUTREACH_MAX_WORDS` — post-processing word ceiling
    /// - `OUTREACH_WEATHER_REQUIRED` — "true"/"1" makes weather mandatory
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("OUTREACH_MAX_ATTEMPTS") {
            config.max_attempts = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "OUTREACH_MAX_ATTEMPTS".into(),
                message: format!("expected a positive integer, got {raw:?}"),
            })?;
        }

        if let Ok(raw) = std::env::var("OUTREACH_MAX_WORDS") {
            config.max_words = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "OUTREACH_MAX_WORDS".into(),
                message: format!("expected a positive integer, got {raw:?}"),
            })?;
        }

        if let Ok(raw) = std::env::var("OUTREACH_WEATHER_REQUIRED") {
            config.weather_policy = match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" => WeatherPolicy::Required,
                "0" | "false" | "no" | "" => WeatherPolicy::Optional,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "OUTREACH_WEATHER_REQUIRED".into(),
                        message: format!("expected a boolean, got {other:?}"),
                    });
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_policy() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.max_words, 300);
        assert_eq!(config.weather_policy, WeatherPolicy::Optional);
    }
}
