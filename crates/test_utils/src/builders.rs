//! Test Data Builders
//!
//! Builders for claim records and for workflows wired to the in-memory
//! stubs. Tests set only what they care about.

use std::sync::Arc;

use domain_claims::stubs::{ScriptedResubmissions, StaticTextExtractor, StubClassifier};
use domain_claims::adapters::KeywordClassifier;
use domain_claims::{
    ClaimCategory, ClaimIntakeService, ClaimRecord, ClaimWorkflow, Classifier, DocumentRef,
    ResubmissionSource, TextExtractor, ValidationStatus, WorkflowConfig, WorkflowRunner,
    WorkflowStep,
};

use crate::fixtures::SubmissionFixtures;

/// Builder for constructing claim records at any point in the workflow
pub struct ClaimRecordBuilder {
    record: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// A fresh record with claimant, date and description filled in
    pub fn new() -> Self {
        let mut record = ClaimRecord::new("I was in a car accident last week");
        record.claimant_name = SubmissionFixtures::CLAIMANT.to_string();
        record.incident_date = SubmissionFixtures::INCIDENT_DATE.to_string();
        record.incident_description = "I was in a car accident last week".to_string();
        Self { record }
    }

    pub fn with_user_input(mut self, input: impl Into<String>) -> Self {
        self.record.user_input = input.into();
        self
    }

    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.record.claimant_name = name.into();
        self
    }

    pub fn with_incident_date(mut self, date: impl Into<String>) -> Self {
        self.record.incident_date = date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.record.incident_description = description.into();
        self
    }

    pub fn with_category(mut self, category: ClaimCategory) -> Self {
        self.record.claim_category = category;
        self
    }

    pub fn with_document(mut self, document: DocumentRef) -> Self {
        self.record.uploaded_documents.push(document);
        self
    }

    pub fn with_status(mut self, status: ValidationStatus) -> Self {
        self.record.validation_status = status;
        self
    }

    pub fn at_step(mut self, step: WorkflowStep) -> Self {
        self.record.current_step = step;
        self
    }

    pub fn build(self) -> ClaimRecord {
        self.record
    }
}

/// Builder for workflows backed by stub ports
pub struct WorkflowBuilder {
    classifier: Arc<dyn Classifier>,
    extractor: Arc<dyn TextExtractor>,
    resubmissions: Option<Arc<dyn ResubmissionSource>>,
    config: WorkflowConfig,
}

impl Default for WorkflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowBuilder {
    /// Keyword classifier, empty extractor, no resubmissions, default limits
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier::new()),
            extractor: Arc::new(StaticTextExtractor::new()),
            resubmissions: None,
            config: WorkflowConfig::default(),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_stub_classifier(self, classifier: StubClassifier) -> Self {
        self.with_classifier(Arc::new(classifier))
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_resubmissions(mut self, resubmissions: Arc<ScriptedResubmissions>) -> Self {
        self.resubmissions = Some(resubmissions);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    pub fn with_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ClaimWorkflow {
        let workflow = ClaimWorkflow::new(self.classifier, self.extractor).with_config(self.config);
        match self.resubmissions {
            Some(resubmissions) => workflow.with_resubmissions(resubmissions),
            None => workflow,
        }
    }

    pub fn build_runner(self) -> WorkflowRunner {
        WorkflowRunner::new(Arc::new(self.build()))
    }

    pub fn build_service(self) -> ClaimIntakeService {
        ClaimIntakeService::new(self.build())
    }
}
