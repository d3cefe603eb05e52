//! Claim intake state machine
//!
//! # Steps
//!
//! ```text
//! Intake -> Validate -+-> Categorize -+-> Checklist -+-> ProcessCategory -> Done
//!                     |               |      ^       |
//!                     |               |      |       v
//!                     |               |      +-- RequestMissing --> Done
//!                     |               |   (re-upload)   (no re-upload)
//!                     |               +-> ProcessCategory (Other: manual review)
//!                     +-> RequestAdditionalInfo -> Done
//! ```
//!
//! [`ClaimWorkflow::execute`] runs one step's handler and returns the step
//! that follows it; [`transition`] is the table it consults. Moving the
//! record from one step to the next is left to the
//! [`WorkflowRunner`](crate::runner::WorkflowRunner).
//!
//! External calls are bounded by the configured timeouts. A failed or
//! timed-out call never aborts the workflow: the affected field falls back to
//! `Unknown`, `Other`, or empty document text.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use core_kernel::PortError;

use crate::checklist::ChecklistEngine;
use crate::claim::{is_resolved, ClaimCategory, ClaimRecord, ValidationStatus, WorkflowStep, UNKNOWN};
use crate::config::WorkflowConfig;
use crate::error::ClaimError;
use crate::notes::{Note, NotesFormatter};
use crate::ports::{Classifier, ExtractedFields, NoResubmissions, ResubmissionSource, TextExtractor};

/// Step that follows `step`, given the record as the step's handler left it
///
/// `resubmitted` is only consulted after `RequestMissing`: it is true when the
/// claimant uploaded documents in response to the request.
pub fn transition(step: WorkflowStep, record: &ClaimRecord, resubmitted: bool) -> WorkflowStep {
    use WorkflowStep::*;
    match step {
        Intake => Validate,
        Validate if record.validation_status == ValidationStatus::Fail => RequestAdditionalInfo,
        Validate => Categorize,
        RequestAdditionalInfo => Done,
        Categorize if !record.claim_category.is_supported() => ProcessCategory,
        Categorize => Checklist,
        Checklist if record.missing_documents.is_empty() => ProcessCategory,
        Checklist => RequestMissing,
        RequestMissing if record.missing_documents.is_empty() => ProcessCategory,
        RequestMissing if resubmitted => Checklist,
        RequestMissing => Done,
        ProcessCategory => Done,
        Done => Done,
    }
}

/// The intake workflow and the ports its steps call
///
/// One instance serves any number of claims; it holds no per-claim state.
pub struct ClaimWorkflow {
    classifier: Arc<dyn Classifier>,
    extractor: Arc<dyn TextExtractor>,
    resubmissions: Arc<dyn ResubmissionSource>,
    config: WorkflowConfig,
}

impl ClaimWorkflow {
    /// Creates a workflow with default limits and no resubmission feed
    pub fn new(classifier: Arc<dyn Classifier>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            classifier,
            extractor,
            resubmissions: Arc::new(NoResubmissions),
            config: WorkflowConfig::default(),
        }
    }

    /// Sets the feed polled when documents are missing
    pub fn with_resubmissions(mut self, resubmissions: Arc<dyn ResubmissionSource>) -> Self {
        self.resubmissions = resubmissions;
        self
    }

    /// Replaces the limits
    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Runs the handler for `step` and returns the next step
    pub async fn execute(&self, step: WorkflowStep, record: &mut ClaimRecord) -> WorkflowStep {
        let mut resubmitted = false;
        match step {
            WorkflowStep::Intake => self.intake(record).await,
            WorkflowStep::Validate => self.validate(record),
            WorkflowStep::RequestAdditionalInfo => self.request_additional_info(record),
            WorkflowStep::Categorize => self.categorize(record).await,
            WorkflowStep::Checklist => self.checklist(record).await,
            WorkflowStep::RequestMissing => resubmitted = self.request_missing(record).await,
            WorkflowStep::ProcessCategory => self.process_category(record),
            WorkflowStep::Done => {}
        }
        transition(step, record, resubmitted)
    }

    /// Fills the structured fields
    ///
    /// Values the caller already supplied win; then whatever the classifier
    /// extracts; the description finally falls back to the raw input.
    async fn intake(&self, record: &mut ClaimRecord) {
        let extracted = match bounded(
            "extract_fields",
            self.config.classifier_timeout(),
            self.classifier.extract_fields(&record.user_input),
        )
        .await
        {
            Ok(fields) => fields.normalized(),
            Err(e) => {
                let error = ClaimError::FieldUnresolved {
                    field: "claimant fields",
                    reason: e.to_string(),
                };
                warn!(claim_id = %record.id, %error, "Field extraction failed, using defaults");
                ExtractedFields::default()
            }
        };

        fill(&mut record.claimant_name, extracted.claimant_name);
        fill(&mut record.incident_date, extracted.incident_date);

        let echo = Some(record.user_input.trim().to_string()).filter(|s| is_resolved(s));
        fill(
            &mut record.incident_description,
            extracted.incident_description.or(echo),
        );
    }

    fn validate(&self, record: &mut ClaimRecord) {
        let unresolved = record.unresolved_fields();
        if unresolved.is_empty() {
            record.validation_status = ValidationStatus::Pass;
            record.notes = NotesFormatter::render(&Note::ValidationPassed);
        } else {
            debug!(claim_id = %record.id, ?unresolved, "Validation failed");
            record.validation_status = ValidationStatus::Fail;
            record.notes = NotesFormatter::render(&Note::ValidationFailed(&unresolved));
        }
    }

    fn request_additional_info(&self, record: &mut ClaimRecord) {
        let unresolved = record.unresolved_fields();
        record.validation_status = ValidationStatus::Fail;
        record.notes = NotesFormatter::render(&Note::RequestAdditionalInfo(&unresolved));
    }

    async fn categorize(&self, record: &mut ClaimRecord) {
        let category = match bounded(
            "categorize",
            self.config.classifier_timeout(),
            self.classifier.categorize(&record.incident_description),
        )
        .await
        {
            Ok(ClaimCategory::Unset) => ClaimCategory::Other,
            Ok(category) => category,
            Err(e) => {
                let error = ClaimError::FieldUnresolved {
                    field: "claim_category",
                    reason: e.to_string(),
                };
                warn!(claim_id = %record.id, %error, "Categorization failed, routing to manual review");
                ClaimCategory::Other
            }
        };
        debug!(claim_id = %record.id, %category, "Claim categorized");
        record.claim_category = category;
    }

    /// Extracts any text not yet cached, then recomputes what is missing
    ///
    /// Every pass re-matches all uploaded documents. Text that could not be
    /// read is cached as empty, unless the failure was transient, in which
    /// case the next pass tries again.
    async fn checklist(&self, record: &mut ClaimRecord) {
        let claim_id = record.id;
        for document in record.uploaded_documents.iter_mut().filter(|d| !d.is_extracted()) {
            match bounded(
                "extract",
                self.config.extractor_timeout(),
                self.extractor.extract(document),
            )
            .await
            {
                Ok(text) => {
                    document.cache_text(text);
                }
                Err(e) => {
                    let error = ClaimError::from_extraction(&document.source, e);
                    warn!(%claim_id, document_id = %document.id, %error, "Document text unavailable");
                    if !error.is_transient() {
                        document.cache_text(String::new());
                    }
                }
            }
        }

        record.missing_documents =
            ChecklistEngine::compute_missing(record.claim_category, &record.uploaded_documents);
        debug!(
            %claim_id,
            missing = ?record.missing_labels(),
            "Checklist evaluated"
        );
    }

    /// Tells the claimant what is missing and checks for a re-upload
    ///
    /// Returns true if new documents arrived.
    async fn request_missing(&self, record: &mut ClaimRecord) -> bool {
        if record.missing_documents.is_empty() {
            return false;
        }
        record.validation_status = ValidationStatus::Fail;
        record.notes = NotesFormatter::render(&Note::MissingDocuments(&record.missing_documents));

        match self.resubmissions.next_upload(record.id).await {
            Some(documents) => {
                info!(
                    claim_id = %record.id,
                    uploaded = documents.len(),
                    "Resubmission received, re-checking documents"
                );
                record.uploaded_documents.extend(documents);
                true
            }
            None => false,
        }
    }

    fn process_category(&self, record: &mut ClaimRecord) {
        if record.claim_category.is_supported() {
            record.missing_documents.clear();
            record.validation_status = ValidationStatus::Success;
            record.notes = NotesFormatter::render(&Note::Processed(record.claim_category));
        } else {
            record.validation_status = ValidationStatus::ManualReview;
            record.notes = NotesFormatter::render(&Note::ManualReview);
        }
    }
}

/// Replaces an unresolved field with `value`, or the sentinel
fn fill(field: &mut String, value: Option<String>) {
    if is_resolved(field) {
        *field = field.trim().to_string();
    } else {
        *field = value.unwrap_or_else(|| UNKNOWN.to_string());
    }
}

/// Awaits a port call, converting an elapsed deadline into `PortError::Timeout`
async fn bounded<T, F>(operation: &str, limit: Duration, call: F) -> Result<T, PortError>
where
    F: Future<Output = Result<T, PortError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(PortError::timeout(operation, limit.as_millis() as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentRef, RequiredDocument};
    use crate::stubs::{StaticTextExtractor, StubClassifier};

    fn record_at(category: ClaimCategory) -> ClaimRecord {
        let mut record = ClaimRecord::new("input");
        record.claim_category = category;
        record
    }

    #[test]
    fn test_transition_after_validation() {
        let mut record = record_at(ClaimCategory::Unset);
        record.validation_status = ValidationStatus::Fail;
        assert_eq!(
            transition(WorkflowStep::Validate, &record, false),
            WorkflowStep::RequestAdditionalInfo
        );

        record.validation_status = ValidationStatus::Pass;
        assert_eq!(transition(WorkflowStep::Validate, &record, false), WorkflowStep::Categorize);
    }

    #[test]
    fn test_other_skips_checklist() {
        let record = record_at(ClaimCategory::Other);
        assert_eq!(
            transition(WorkflowStep::Categorize, &record, false),
            WorkflowStep::ProcessCategory
        );
    }

    #[test]
    fn test_request_missing_transitions() {
        let mut record = record_at(ClaimCategory::Auto);
        record.missing_documents.insert(RequiredDocument::AccidentReport);

        assert_eq!(transition(WorkflowStep::Checklist, &record, false), WorkflowStep::RequestMissing);
        assert_eq!(transition(WorkflowStep::RequestMissing, &record, true), WorkflowStep::Checklist);
        assert_eq!(transition(WorkflowStep::RequestMissing, &record, false), WorkflowStep::Done);

        record.missing_documents.clear();
        assert_eq!(
            transition(WorkflowStep::RequestMissing, &record, false),
            WorkflowStep::ProcessCategory
        );
    }

    #[test]
    fn test_terminal_steps() {
        let record = record_at(ClaimCategory::Home);
        assert_eq!(transition(WorkflowStep::ProcessCategory, &record, false), WorkflowStep::Done);
        assert_eq!(transition(WorkflowStep::RequestAdditionalInfo, &record, false), WorkflowStep::Done);
        assert_eq!(transition(WorkflowStep::Done, &record, true), WorkflowStep::Done);
    }

    #[test]
    fn test_fill_prefers_existing_value() {
        let mut name = " Jane Roe ".to_string();
        fill(&mut name, Some("Other Name".to_string()));
        assert_eq!(name, "Jane Roe");

        let mut date = UNKNOWN.to_string();
        fill(&mut date, None);
        assert_eq!(date, UNKNOWN);
    }

    #[tokio::test]
    async fn test_checklist_caches_unsupported_as_empty() {
        let workflow = ClaimWorkflow::new(
            Arc::new(StubClassifier::new()),
            Arc::new(StaticTextExtractor::new()),
        );
        let mut record = record_at(ClaimCategory::Health)
            .with_documents([DocumentRef::new("scan.png")]);

        let next = workflow.execute(WorkflowStep::Checklist, &mut record).await;

        assert_eq!(next, WorkflowStep::RequestMissing);
        assert_eq!(record.uploaded_documents[0].text(), Some(""));
        assert_eq!(record.missing_documents.len(), 3);
    }

    #[tokio::test]
    async fn test_checklist_retries_transient_failures() {
        let extractor = Arc::new(StaticTextExtractor::new().failing("report.pdf"));
        let workflow = ClaimWorkflow::new(Arc::new(StubClassifier::new()), extractor.clone());
        let mut record = record_at(ClaimCategory::Auto)
            .with_documents([DocumentRef::new("report.pdf")]);

        workflow.execute(WorkflowStep::Checklist, &mut record).await;
        workflow.execute(WorkflowStep::Checklist, &mut record).await;

        assert!(!record.uploaded_documents[0].is_extracted());
        assert_eq!(extractor.calls(), 2);
    }

    #[tokio::test]
    async fn test_categorize_timeout_falls_back_to_other() {
        let classifier = StubClassifier::new()
            .categorizing_as(ClaimCategory::Auto)
            .with_delay(Duration::from_millis(200));
        let workflow = ClaimWorkflow::new(Arc::new(classifier), Arc::new(StaticTextExtractor::new()))
            .with_config(WorkflowConfig {
                classifier_timeout_ms: 10,
                ..Default::default()
            });
        let mut record = record_at(ClaimCategory::Unset);

        let next = workflow.execute(WorkflowStep::Categorize, &mut record).await;

        assert_eq!(record.claim_category, ClaimCategory::Other);
        assert_eq!(next, WorkflowStep::ProcessCategory);
    }
}
