//! Custom Test Assertions
//!
//! Assertion helpers for finished claim records that print the whole
//! verdict on failure.

use domain_claims::{ClaimCategory, ClaimRecord, RequiredDocument, ValidationStatus, WorkflowStep};

/// Asserts that the record finished with `status`
pub fn assert_verdict(record: &ClaimRecord, status: ValidationStatus) {
    assert!(
        record.is_complete(),
        "Expected a completed record, still at {:?} (trail {:?})",
        record.current_step,
        record.trail
    );
    assert_eq!(
        record.validation_status, status,
        "Unexpected verdict; notes: {:?}, trail: {:?}",
        record.notes, record.trail
    );
}

/// Asserts the category and the exact set of missing documents
pub fn assert_checklist(
    record: &ClaimRecord,
    category: ClaimCategory,
    missing: &[RequiredDocument],
) {
    assert_eq!(record.claim_category, category, "Category mismatch; notes: {:?}", record.notes);
    let actual: Vec<_> = record.missing_documents.iter().copied().collect();
    let mut expected = missing.to_vec();
    expected.sort();
    assert_eq!(actual, expected, "Missing documents mismatch");
}

/// Asserts that a step appears in the record's trail
pub fn assert_visited(record: &ClaimRecord, step: WorkflowStep) {
    assert!(
        record.trail.contains(&step),
        "Expected {:?} in trail {:?}",
        step,
        record.trail
    );
}

/// Asserts that a step never ran
pub fn assert_not_visited(record: &ClaimRecord, step: WorkflowStep) {
    assert!(
        !record.trail.contains(&step),
        "Did not expect {:?} in trail {:?}",
        step,
        record.trail
    );
}

/// Asserts that the notes mention every fragment
pub fn assert_notes_mention(record: &ClaimRecord, fragments: &[&str]) {
    for fragment in fragments {
        assert!(
            record.notes.contains(fragment),
            "Notes {:?} do not mention {:?}",
            record.notes,
            fragment
        );
    }
}

/// Asserts the record invariants that hold at the end of every run
pub fn assert_record_invariants(record: &ClaimRecord) {
    let required = domain_claims::ChecklistEngine::required_documents(record.claim_category);
    for missing in &record.missing_documents {
        assert!(
            required.contains(missing),
            "{:?} is missing but not required for {:?}",
            missing,
            record.claim_category
        );
    }
    if record.validation_status == ValidationStatus::Success {
        assert!(
            record.claim_category.is_supported(),
            "Success with unsupported category {:?}",
            record.claim_category
        );
    }
    assert!(record.validation_status.is_final(), "Status {:?} is not final", record.validation_status);
    assert!(!record.notes.is_empty(), "Finished record has no notes");
}
