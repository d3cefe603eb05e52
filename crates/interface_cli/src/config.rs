//! CLI configuration

use serde::Deserialize;

use domain_claims::WorkflowConfig;

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Document requests allowed per claim before escalation
    pub max_iterations: u32,
    /// Classifier call timeout in milliseconds
    pub classifier_timeout_ms: u64,
    /// Document extraction timeout in milliseconds
    pub extractor_timeout_ms: u64,
    /// Largest document file that will be read, in bytes
    pub max_document_bytes: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        let workflow = WorkflowConfig::default();
        Self {
            log_level: "warn".to_string(),
            max_iterations: workflow.max_iterations,
            classifier_timeout_ms: workflow.classifier_timeout_ms,
            extractor_timeout_ms: workflow.extractor_timeout_ms,
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("CLAIMS"))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Overrides the document request limit when one is given
    pub fn with_max_iterations(mut self, max_iterations: Option<u32>) -> Self {
        if let Some(max_iterations) = max_iterations {
            self.max_iterations = max_iterations;
        }
        self
    }

    /// Limits handed to the workflow
    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            max_iterations: self.max_iterations,
            classifier_timeout_ms: self.classifier_timeout_ms,
            extractor_timeout_ms: self.extractor_timeout_ms,
        }
    }
}
