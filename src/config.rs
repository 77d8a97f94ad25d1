use crate::error::{GenerationError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate";
pub const DEFAULT_MAX_RETRIES: u32 = 20;
pub const DEFAULT_SUBJECT: &str = "Cresencio";

/// Initial values for the three prompt fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefaults {
    pub style: String,
    pub artist: String,
    pub finishing_touches: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        PromptDefaults {
            style: "realistic".to_string(),
            artist: "pablo picasso".to_string(),
            finishing_touches: "highly-detailed".to_string(),
        }
    }
}

impl PromptDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_finishing_touches(mut self, finishing_touches: impl Into<String>) -> Self {
        self.finishing_touches = finishing_touches.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub endpoint: String,
    pub max_retries: u32,
    pub subject: String,
    pub defaults: PromptDefaults,
    pub min_retry_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        WorkflowConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            subject: DEFAULT_SUBJECT.to_string(),
            defaults: PromptDefaults::default(),
            min_retry_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the endpoint address comes from the environment.
    pub fn from_env() -> Self {
        let endpoint = env::var("AVATARGEN_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        WorkflowConfig {
            endpoint,
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_defaults(mut self, defaults: PromptDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_min_retry_delay(mut self, delay: Duration) -> Self {
        self.min_retry_delay = delay;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(GenerationError::ConfigError(
                "Service endpoint is required".into(),
            ));
        }
        if self.max_retries == 0 {
            return Err(GenerationError::ConfigError(
                "max_retries must be at least 1".into(),
            ));
        }
        if self.min_retry_delay.is_zero() {
            return Err(GenerationError::ConfigError(
                "min_retry_delay must be positive".into(),
            ));
        }
        if self.subject.trim().is_empty() {
            return Err(GenerationError::ConfigError("Prompt subject is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workflow_config() {
        let config = WorkflowConfig::new();
        assert_eq!(config.max_retries, 20);
        assert_eq!(config.subject, "Cresencio");
        assert_eq!(config.defaults.style, "realistic");
        assert_eq!(config.defaults.artist, "pablo picasso");
        assert_eq!(config.defaults.finishing_touches, "highly-detailed");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = WorkflowConfig::new()
            .with_endpoint("http://127.0.0.1:9000/gen")
            .with_max_retries(3)
            .with_subject("Ada")
            .with_defaults(PromptDefaults::new().with_style("watercolor"));

        assert_eq!(config.endpoint, "http://127.0.0.1:9000/gen");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.subject, "Ada");
        assert_eq!(config.defaults.style, "watercolor");
        assert_eq!(config.defaults.artist, "pablo picasso");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(WorkflowConfig::new().with_endpoint(" ").validate().is_err());
        assert!(WorkflowConfig::new().with_max_retries(0).validate().is_err());
        assert!(WorkflowConfig::new().with_subject("").validate().is_err());
        assert!(WorkflowConfig::new()
            .with_min_retry_delay(Duration::ZERO)
            .validate()
            .is_err());
    }
}
