//! Command-Line Interface
//!
//! Wires the claim intake workflow to local adapters so a single claim can be
//! run from a shell.
//!
//! # Architecture
//!
//! - **Config**: limits and log level, loaded from `CLAIMS_*` variables
//! - **DTOs**: the JSON verdict printed on stdout
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{build_service, config::CliConfig};
//!
//! let service = build_service(&CliConfig::default())?;
//! let record = service.process_claim(submission).await;
//! println!("{}", serde_json::to_string(&ClaimResponse::from(&record))?);
//! ```

pub mod config;
pub mod dto;

use std::path::Path;
use std::sync::Arc;

use core_kernel::CoreError;
use domain_claims::adapters::{KeywordClassifier, PlainTextExtractor};
use domain_claims::{ClaimIntakeService, ClaimSubmission, ClaimWorkflow, DocumentRef};

use crate::config::CliConfig;

/// Builds a workflow backed by the keyword classifier and plain-text files
///
/// # Errors
///
/// Returns `CoreError::Configuration` if the configured limits are unusable.
pub fn build_workflow(config: &CliConfig) -> Result<ClaimWorkflow, CoreError> {
    let workflow_config = config.workflow_config();
    workflow_config.validate()?;

    let extractor = PlainTextExtractor::new().with_max_bytes(config.max_document_bytes);
    Ok(ClaimWorkflow::new(Arc::new(KeywordClassifier::new()), Arc::new(extractor))
        .with_config(workflow_config))
}

/// Builds the intake service on top of [`build_workflow`]
pub fn build_service(config: &CliConfig) -> Result<ClaimIntakeService, CoreError> {
    build_workflow(config).map(ClaimIntakeService::new)
}

/// Assembles a submission from command-line values
pub fn submission<P: AsRef<Path>>(
    user_input: &str,
    claimant_name: Option<String>,
    incident_date: Option<String>,
    documents: &[P],
) -> ClaimSubmission {
    let mut submission = ClaimSubmission::new(user_input);
    submission.claimant_name = claimant_name;
    submission.incident_date = incident_date;
    submission.documents = documents
        .iter()
        .map(|path| DocumentRef::new(path.as_ref().display().to_string()))
        .collect();
    submission
}
