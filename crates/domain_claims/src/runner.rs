//! Drives a claim through the workflow

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::claim::{ClaimRecord, ValidationStatus, WorkflowStep};
use crate::error::ClaimError;
use crate::notes::{Note, NotesFormatter};
use crate::workflow::ClaimWorkflow;

/// Runs claims to completion
///
/// The runner is the only code that advances a record's `current_step`.
/// Each run enters RequestMissing at most `max_iterations` times, which
/// bounds the RequestMissing/Checklist loop when a claimant keeps
/// resubmitting without completing the checklist. Every other step runs at
/// most once per pass, so a run never exceeds `5 + 2 * max_iterations` steps.
#[derive(Clone)]
pub struct WorkflowRunner {
    workflow: Arc<ClaimWorkflow>,
}

impl WorkflowRunner {
    pub fn new(workflow: Arc<ClaimWorkflow>) -> Self {
        Self { workflow }
    }

    pub fn workflow(&self) -> &ClaimWorkflow {
        &self.workflow
    }

    /// Runs `record` until it reaches `Done` or the document requests run out
    ///
    /// Always returns a completed record with a definitive status and a note.
    /// A record that is already `Done` is returned unchanged.
    pub async fn run(&self, mut record: ClaimRecord) -> ClaimRecord {
        if record.is_complete() {
            return record;
        }

        let max_iterations = self.workflow.config().max_iterations;
        info!(claim_id = %record.id, max_iterations, "Starting claim workflow");

        let mut steps: u32 = 0;
        let mut iterations: u32 = 0;
        while !record.current_step.is_terminal() {
            let step = record.current_step;
            if step == WorkflowStep::RequestMissing {
                if iterations >= max_iterations {
                    let error = ClaimError::WorkflowExhausted { iterations };
                    warn!(
                        claim_id = %record.id,
                        missing = ?record.missing_labels(),
                        %error,
                        "Escalating claim for manual handling"
                    );
                    record.validation_status = ValidationStatus::Fail;
                    record.notes = NotesFormatter::render(&Note::Exhausted { iterations });
                    record.current_step = WorkflowStep::Done;
                    break;
                }
                iterations += 1;
            }

            record.trail.push(step);
            let next = self.workflow.execute(step, &mut record).await;
            debug!(claim_id = %record.id, ?step, ?next, "Step complete");

            record.current_step = next;
            steps += 1;
        }

        record.completed_at = Some(Utc::now());
        info!(
            claim_id = %record.id,
            steps,
            iterations,
            category = %record.claim_category,
            status = ?record.validation_status,
            "Claim workflow finished"
        );
        record
    }
}
