//! Claim record - the working state carried through the intake workflow

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;
use crate::document::{DocumentRef, RequiredDocument};
use crate::error::ClaimError;

/// Sentinel stored in a text field when nothing usable was extracted
pub const UNKNOWN: &str = "Unknown";

/// Claim category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimCategory {
    Auto,
    Home,
    Health,
    Travel,
    Life,
    /// Recognised as a claim but outside the five supported lines
    Other,
    /// Not categorized yet
    #[default]
    Unset,
}

impl ClaimCategory {
    /// Categories that have a document checklist
    pub const SUPPORTED: [ClaimCategory; 5] = [
        ClaimCategory::Auto,
        ClaimCategory::Home,
        ClaimCategory::Health,
        ClaimCategory::Travel,
        ClaimCategory::Life,
    ];

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimCategory::Auto => "Auto",
            ClaimCategory::Home => "Home",
            ClaimCategory::Health => "Health",
            ClaimCategory::Travel => "Travel",
            ClaimCategory::Life => "Life",
            ClaimCategory::Other => "Other",
            ClaimCategory::Unset => "Unset",
        }
    }

    /// Returns true for the five categories with a dedicated processing branch
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    /// Interprets a classifier answer
    ///
    /// For model-backed `Classifier` adapters, which receive the category as
    /// free text.
    ///
    /// Surrounding whitespace, quotes and a trailing period are ignored. The
    /// name itself must match a canonical category exactly; anything else,
    /// including a different capitalization, resolves to `Other`.
    pub fn from_model_output(raw: &str) -> Self {
        let cleaned = raw
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
            .trim_end_matches('.')
            .trim();
        cleaned.parse().unwrap_or(ClaimCategory::Other)
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimCategory {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Auto" => Ok(ClaimCategory::Auto),
            "Home" => Ok(ClaimCategory::Home),
            "Health" => Ok(ClaimCategory::Health),
            "Travel" => Ok(ClaimCategory::Travel),
            "Life" => Ok(ClaimCategory::Life),
            "Other" => Ok(ClaimCategory::Other),
            other => Err(ClaimError::FieldUnresolved {
                field: "claim_category",
                reason: format!("unrecognised category '{}'", other),
            }),
        }
    }
}

/// Verdict recorded on the claim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[default]
    Unset,
    Pass,
    Fail,
    ManualReview,
    Success,
}

impl ValidationStatus {
    /// Returns true for a definitive verdict
    pub fn is_final(&self) -> bool {
        !matches!(self, ValidationStatus::Unset | ValidationStatus::Pass)
    }
}

/// Named steps of the intake workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    #[default]
    Intake,
    Validate,
    Categorize,
    Checklist,
    RequestMissing,
    RequestAdditionalInfo,
    ProcessCategory,
    Done,
}

impl WorkflowStep {
    /// Returns true once no further step can run
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStep::Done)
    }
}

/// Structured fields required before a claim can be categorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimField {
    ClaimantName,
    IncidentDate,
    IncidentDescription,
    ClaimCategory,
}

impl ClaimField {
    /// Short description used in validation notes
    pub fn problem(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "Claimant name is missing",
            ClaimField::IncidentDate => "Incident date is missing",
            ClaimField::IncidentDescription => "Incident description is missing",
            ClaimField::ClaimCategory => "Claim category is invalid or not supported",
        }
    }
}

/// A claim moving through intake
///
/// One record per submission. The active step's handler is the only code
/// that writes to it, and [`WorkflowRunner`](crate::runner::WorkflowRunner)
/// is the only code that moves `current_step`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Unique identifier
    pub id: ClaimId,
    /// Raw submitted text
    pub user_input: String,
    /// Claimant name, or `Unknown`
    pub claimant_name: String,
    /// Incident date as given, or `Unknown`
    pub incident_date: String,
    /// Incident description, or `Unknown`
    pub incident_description: String,
    /// Category
    pub claim_category: ClaimCategory,
    /// Uploaded documents in upload order
    pub uploaded_documents: Vec<DocumentRef>,
    /// Required documents not matched by any upload
    pub missing_documents: BTreeSet<RequiredDocument>,
    /// Verdict
    pub validation_status: ValidationStatus,
    /// Latest message for the claimant
    pub notes: String,
    /// Active step
    pub current_step: WorkflowStep,
    /// Steps executed so far, in order
    pub trail: Vec<WorkflowStep>,
    /// When the submission was received
    pub received_at: DateTime<Utc>,
    /// When the workflow reached `Done`
    pub completed_at: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    /// Creates a record for a fresh submission, every other field at its default
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            id: ClaimId::new_v7(),
            user_input: user_input.into(),
            claimant_name: UNKNOWN.to_string(),
            incident_date: UNKNOWN.to_string(),
            incident_description: UNKNOWN.to_string(),
            claim_category: ClaimCategory::Unset,
            uploaded_documents: Vec::new(),
            missing_documents: BTreeSet::new(),
            validation_status: ValidationStatus::Unset,
            notes: String::new(),
            current_step: WorkflowStep::Intake,
            trail: Vec::new(),
            received_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Attaches uploaded documents
    pub fn with_documents(mut self, documents: impl IntoIterator<Item = DocumentRef>) -> Self {
        self.uploaded_documents.extend(documents);
        self
    }

    /// Returns true once the workflow has finished with this record
    pub fn is_complete(&self) -> bool {
        self.current_step.is_terminal()
    }

    /// Fields that are absent or still hold a sentinel
    pub fn unresolved_fields(&self) -> Vec<ClaimField> {
        let mut fields = Vec::new();
        if !is_resolved(&self.claimant_name) {
            fields.push(ClaimField::ClaimantName);
        }
        if !is_resolved(&self.incident_date) {
            fields.push(ClaimField::IncidentDate);
        }
        if !is_resolved(&self.incident_description) {
            fields.push(ClaimField::IncidentDescription);
        }
        // Unset is fine here: categorization has not run yet.
        if self.claim_category == ClaimCategory::Other {
            fields.push(ClaimField::ClaimCategory);
        }
        fields
    }

    /// Missing document labels in display order
    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing_documents.iter().map(|d| d.label()).collect()
    }
}

/// Returns true if a text field holds a real value
pub fn is_resolved(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = ClaimRecord::new("I was in a car accident");

        assert_eq!(record.claimant_name, UNKNOWN);
        assert_eq!(record.claim_category, ClaimCategory::Unset);
        assert_eq!(record.validation_status, ValidationStatus::Unset);
        assert_eq!(record.current_step, WorkflowStep::Intake);
        assert!(record.trail.is_empty());
        assert!(!record.is_complete());
    }

    #[test]
    fn test_category_parsing_is_exact() {
        assert_eq!("Health".parse::<ClaimCategory>().unwrap(), ClaimCategory::Health);
        assert!("health".parse::<ClaimCategory>().is_err());
        assert!("Unset".parse::<ClaimCategory>().is_err());
    }

    #[test]
    fn test_category_from_model_output() {
        assert_eq!(ClaimCategory::from_model_output("  Auto\n"), ClaimCategory::Auto);
        assert_eq!(ClaimCategory::from_model_output("\"Travel\"."), ClaimCategory::Travel);
        assert_eq!(ClaimCategory::from_model_output("AUTO"), ClaimCategory::Other);
        assert_eq!(ClaimCategory::from_model_output(""), ClaimCategory::Other);
    }

    #[test]
    fn test_unresolved_fields() {
        let mut record = ClaimRecord::new("text");
        record.incident_description = "Rear-ended at a light".to_string();
        record.incident_date = "  ".to_string();

        assert_eq!(
            record.unresolved_fields(),
            vec![ClaimField::ClaimantName, ClaimField::IncidentDate]
        );

        record.claim_category = ClaimCategory::Other;
        assert!(record.unresolved_fields().contains(&ClaimField::ClaimCategory));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ValidationStatus::ManualReview).unwrap();
        assert_eq!(json, "\"manual_review\"");
    }
}
