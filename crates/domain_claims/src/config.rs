//! Workflow configuration

use std::time::Duration;

use serde::Deserialize;

use core_kernel::CoreError;

/// Limits applied to a single workflow run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Document requests (RequestMissing rounds) allowed before a claim is
    /// escalated for manual handling
    pub max_iterations: u32,
    /// Timeout for each classifier call, in milliseconds
    pub classifier_timeout_ms: u64,
    /// Timeout for each document extraction, in milliseconds
    pub extractor_timeout_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            classifier_timeout_ms: 30_000,
            extractor_timeout_ms: 30_000,
        }
    }
}

impl WorkflowConfig {
    /// Checks the limits are usable
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if any limit is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_iterations == 0 {
            return Err(CoreError::configuration("max_iterations must be at least 1"));
        }
        if self.classifier_timeout_ms == 0 || self.extractor_timeout_ms == 0 {
            return Err(CoreError::configuration("timeouts must be at least 1ms"));
        }
        Ok(())
    }

    pub fn classifier_timeout(&self) -> Duration {
        Duration::from_millis(self.classifier_timeout_ms)
    }

    pub fn extractor_timeout(&self) -> Duration {
        Duration::from_millis(self.extractor_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorkflowConfig::default();
        assert_eq!(config.max_iterations, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = WorkflowConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: WorkflowConfig = serde_json::from_str(r#"{"max_iterations": 4}"#).unwrap();
        assert_eq!(config.max_iterations, 4);
        assert_eq!(config.classifier_timeout_ms, 30_000);
    }
}
