//! Output DTOs

use serde::{Deserialize, Serialize};

use domain_claims::{ClaimRecord, ValidationStatus};

/// Verdict printed for a processed claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub claim_id: String,
    pub claim_category: String,
    pub validation_status: ValidationStatus,
    pub missing_documents: Vec<String>,
    pub notes: String,
}

impl From<&ClaimRecord> for ClaimResponse {
    fn from(record: &ClaimRecord) -> Self {
        Self {
            claim_id: record.id.to_string(),
            claim_category: record.claim_category.to_string(),
            validation_status: record.validation_status,
            missing_documents: record
                .missing_labels()
                .into_iter()
                .map(String::from)
                .collect(),
            notes: record.notes.clone(),
        }
    }
}
