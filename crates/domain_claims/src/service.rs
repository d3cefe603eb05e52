//! Claim intake entry point

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::claim::ClaimRecord;
use crate::document::DocumentRef;
use crate::runner::WorkflowRunner;
use crate::workflow::ClaimWorkflow;

/// What a claimant submits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimSubmission {
    /// Free-text description of what happened
    pub user_input: String,
    /// Name, if the claimant filled it in
    pub claimant_name: Option<String>,
    /// Incident date, if the claimant filled it in
    pub incident_date: Option<String>,
    /// Uploaded documents
    pub documents: Vec<DocumentRef>,
}

impl ClaimSubmission {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            ..Default::default()
        }
    }

    pub fn claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = Some(name.into());
        self
    }

    pub fn incident_date(mut self, date: impl Into<String>) -> Self {
        self.incident_date = Some(date.into());
        self
    }

    pub fn document(mut self, document: DocumentRef) -> Self {
        self.documents.push(document);
        self
    }

    /// Builds the initial record the workflow starts from
    pub fn into_record(self) -> ClaimRecord {
        let mut record = ClaimRecord::new(self.user_input).with_documents(self.documents);
        if let Some(name) = self.claimant_name {
            record.claimant_name = name;
        }
        if let Some(date) = self.incident_date {
            record.incident_date = date;
        }
        record
    }
}

/// Service that processes claim submissions
///
/// Cheap to clone; concurrent calls share the workflow but each works on its
/// own record.
#[derive(Clone)]
pub struct ClaimIntakeService {
    runner: WorkflowRunner,
}

impl ClaimIntakeService {
    pub fn new(workflow: ClaimWorkflow) -> Self {
        Self {
            runner: WorkflowRunner::new(Arc::new(workflow)),
        }
    }

    /// Runs one submission through intake and returns the finished record
    pub async fn process_claim(&self, submission: ClaimSubmission) -> ClaimRecord {
        self.runner.run(submission.into_record()).await
    }
}
