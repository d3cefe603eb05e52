//! Claimant-facing status messages

use std::collections::BTreeSet;

use crate::claim::{ClaimCategory, ClaimField};
use crate::document::RequiredDocument;

const LIST_SEPARATOR: &str = ", ";

/// What a note is about, with the details it lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note<'a> {
    ValidationPassed,
    ValidationFailed(&'a [ClaimField]),
    RequestAdditionalInfo(&'a [ClaimField]),
    MissingDocuments(&'a BTreeSet<RequiredDocument>),
    Processed(ClaimCategory),
    ManualReview,
    Exhausted { iterations: u32 },
}

/// Renders notes
///
/// Output is deterministic for a given note; there is no localisation.
pub struct NotesFormatter;

impl NotesFormatter {
    pub fn render(note: &Note<'_>) -> String {
        match note {
            Note::ValidationPassed => "Validation checks passed".to_string(),
            Note::ValidationFailed(fields) => {
                format!("Validation failed: {}", Self::problems(fields))
            }
            Note::RequestAdditionalInfo(fields) if fields.is_empty() => {
                "Awaiting more details. Please resubmit with corrected details.".to_string()
            }
            Note::RequestAdditionalInfo(fields) => format!(
                "Missing info: {}. Please resubmit with corrected details.",
                Self::problems(fields)
            ),
            Note::MissingDocuments(missing) => format!(
                "Missing documents: {}. Please upload them.",
                missing
                    .iter()
                    .map(|d| d.label())
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR)
            ),
            Note::Processed(category) if category.is_supported() => {
                format!("{} claim is being processed successfully.", category)
            }
            Note::Processed(_) => "Claim processed successfully.".to_string(),
            Note::ManualReview => {
                "Manual review required. Please upload any relevant documents.".to_string()
            }
            Note::Exhausted { iterations } => format!(
                "Claim could not be completed after {} document requests. Escalated for manual handling.",
                iterations
            ),
        }
    }

    fn problems(fields: &[ClaimField]) -> String {
        fields
            .iter()
            .map(|f| f.problem())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR)
    }
}
