//! Claims Domain Ports
//!
//! The workflow depends on three external capabilities, each behind a trait:
//!
//! - **Classifier**: pulls structured fields out of free text and picks a
//!   claim category (typically a language model)
//! - **TextExtractor**: turns an uploaded document into plain text (OCR, PDF
//!   parsing, or a plain file read)
//! - **ResubmissionSource**: delivers documents the claimant uploads after
//!   being told what is missing
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::adapters::{KeywordClassifier, PlainTextExtractor};
//! use domain_claims::ClaimWorkflow;
//! use std::sync::Arc;
//!
//! let workflow = ClaimWorkflow::new(
//!     Arc::new(KeywordClassifier::new()),
//!     Arc::new(PlainTextExtractor::new()),
//! );
//! ```
//!
//! Adapters report failures as [`PortError`]; the workflow decides how to
//! degrade, so an adapter never has to invent fallback values itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::{is_resolved, ClaimCategory};
use crate::document::DocumentRef;

/// Fields a classifier could pull out of the claimant's message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(default)]
    pub claimant_name: Option<String>,
    #[serde(default)]
    pub incident_date: Option<String>,
    #[serde(default)]
    pub incident_description: Option<String>,
}

impl ExtractedFields {
    /// Parses the JSON object a language model was asked to return
    ///
    /// For model-backed `Classifier` adapters; the local adapters never call it.
    ///
    /// The object may be wrapped in prose or a code fence. Empty values and
    /// the `Unknown` sentinel are dropped so callers see them as absent.
    ///
    /// # Errors
    ///
    /// Returns `PortError::Transformation` if no JSON object can be read.
    pub fn from_model_output(raw: &str) -> Result<Self, PortError> {
        let start = raw.find('{');
        let end = raw.rfind('}');
        let body = match (start, end) {
            (Some(start), Some(end)) if start < end => &raw[start..=end],
            _ => {
                return Err(PortError::transformation(
                    "model output contains no JSON object",
                ))
            }
        };

        let parsed: ExtractedFields = serde_json::from_str(body)
            .map_err(|e| PortError::transformation(format!("invalid field JSON: {}", e)))?;

        Ok(parsed.normalized())
    }

    /// Drops blank and sentinel values, trimming the rest
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| is_resolved(v))
        }

        Self {
            claimant_name: keep(self.claimant_name),
            incident_date: keep(self.incident_date),
            incident_description: keep(self.incident_description),
        }
    }
}

/// Field extraction and categorization
#[async_trait]
pub trait Classifier: DomainPort {
    /// Best-effort extraction of the structured claim fields
    async fn extract_fields(&self, free_text: &str) -> Result<ExtractedFields, PortError>;

    /// Picks one of the five supported categories, or `Other`
    async fn categorize(&self, incident_description: &str) -> Result<ClaimCategory, PortError>;
}

/// Document text extraction
#[async_trait]
pub trait TextExtractor: DomainPort {
    /// Returns the document's text
    ///
    /// # Errors
    ///
    /// `PortError::UnsupportedFormat` when the document type cannot be read;
    /// any other variant for I/O or service failures.
    async fn extract(&self, document: &DocumentRef) -> Result<String, PortError>;
}

/// Re-uploads for a claim that was asked for missing documents
#[async_trait]
pub trait ResubmissionSource: DomainPort {
    /// Documents uploaded since the last request, or `None` if the claimant
    /// has not resubmitted
    async fn next_upload(&self, claim_id: ClaimId) -> Option<Vec<DocumentRef>>;
}

/// Resubmission source for one-shot intake: nobody ever resubmits
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResubmissions;

impl DomainPort for NoResubmissions {}

#[async_trait]
impl ResubmissionSource for NoResubmissions {
    async fn next_upload(&self, _claim_id: ClaimId) -> Option<Vec<DocumentRef>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_output() {
        let raw = r#"{"claimant_name": "John Doe", "incident_date": "2025-08-10", "incident_description": "Rear-ended at a light"}"#;

        let fields = ExtractedFields::from_model_output(raw).unwrap();

        assert_eq!(fields.claimant_name.as_deref(), Some("John Doe"));
        assert_eq!(fields.incident_date.as_deref(), Some("2025-08-10"));
    }

    #[test]
    fn test_parse_model_output_in_code_fence() {
        let raw = "Here you go:\n```json\n{\"claimant_name\": \"Unknown\", \"incident_date\": \" \"}\n```";

        let fields = ExtractedFields::from_model_output(raw).unwrap();

        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn test_parse_model_output_rejects_prose() {
        let error = ExtractedFields::from_model_output("I could not find any details.").unwrap_err();
        assert!(matches!(error, PortError::Transformation { .. }));
    }

    #[test]
    fn test_parse_model_output_rejects_broken_json() {
        assert!(ExtractedFields::from_model_output("{\"claimant_name\": }").is_err());
    }
}
