//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim categories, uploads and records.

use proptest::prelude::*;

use domain_claims::{ChecklistEngine, ClaimCategory, ClaimRecord, DocumentRef, RequiredDocument};

use crate::fixtures::DocumentFixtures;

const ALL_DOCUMENTS: [RequiredDocument; 15] = [
    RequiredDocument::DriversLicense,
    RequiredDocument::VehicleRegistration,
    RequiredDocument::AccidentReport,
    RequiredDocument::ProofOfOwnership,
    RequiredDocument::DamagePhotos,
    RequiredDocument::RepairEstimates,
    RequiredDocument::MedicalReport,
    RequiredDocument::Bills,
    RequiredDocument::InsuranceCard,
    RequiredDocument::Itinerary,
    RequiredDocument::ProofOfExpense,
    RequiredDocument::TravelInsurancePolicy,
    RequiredDocument::DeathCertificate,
    RequiredDocument::PolicyDocument,
    RequiredDocument::IdProof,
];

/// Strategy for the five categories with a checklist
pub fn supported_category_strategy() -> impl Strategy<Value = ClaimCategory> {
    prop_oneof![
        Just(ClaimCategory::Auto),
        Just(ClaimCategory::Home),
        Just(ClaimCategory::Health),
        Just(ClaimCategory::Travel),
        Just(ClaimCategory::Life),
    ]
}

/// Strategy for any category, including `Other` and `Unset`
pub fn category_strategy() -> impl Strategy<Value = ClaimCategory> {
    prop_oneof![
        4 => supported_category_strategy(),
        1 => Just(ClaimCategory::Other),
        1 => Just(ClaimCategory::Unset),
    ]
}

/// Strategy for any required document kind
pub fn required_document_strategy() -> impl Strategy<Value = RequiredDocument> {
    proptest::sample::select(ALL_DOCUMENTS.to_vec())
}

/// Strategy for a supported category plus a mask of which requirements are uploaded
pub fn checklist_upload_strategy() -> impl Strategy<Value = (ClaimCategory, Vec<bool>)> {
    (supported_category_strategy(), proptest::collection::vec(any::<bool>(), 3))
}

/// Documents for the requirements selected by `mask`, plus `noise` blank pages
pub fn uploads_for(category: ClaimCategory, mask: &[bool], noise: usize) -> Vec<DocumentRef> {
    let mut documents: Vec<DocumentRef> = ChecklistEngine::required_documents(category)
        .iter()
        .zip(mask)
        .filter(|(_, uploaded)| **uploaded)
        .map(|(kind, _)| DocumentFixtures::document(*kind))
        .collect();
    documents.extend(
        (0..noise).map(|i| DocumentRef::with_text(format!("uploads/blank-{}.txt", i), DocumentFixtures::blank())),
    );
    documents
}

/// Strategy for arbitrary uploaded documents, fixture or free text
pub fn document_strategy() -> impl Strategy<Value = DocumentRef> {
    prop_oneof![
        required_document_strategy().prop_map(DocumentFixtures::document),
        "[a-zA-Z ]{0,40}".prop_map(|text| DocumentRef::with_text("uploads/free.txt", text)),
        Just(DocumentRef::new("uploads/never-extracted.pdf")),
    ]
}

/// Strategy for a text field that may be resolved, blank or the sentinel
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Unknown".to_string()),
        Just(String::new()),
        "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?",
    ]
}

/// Strategy for fresh claim records with arbitrary fields and uploads
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        "[a-z ]{0,60}",
        field_strategy(),
        field_strategy(),
        proptest::collection::vec(document_strategy(), 0..6),
    )
        .prop_map(|(input, name, date, documents)| {
            let mut record = ClaimRecord::new(input).with_documents(documents);
            record.claimant_name = name;
            record.incident_date = date;
            record
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn supported_categories_have_checklists(category in supported_category_strategy()) {
            prop_assert_eq!(ChecklistEngine::required_documents(category).len(), 3);
        }

        #[test]
        fn uploads_follow_the_mask(
            (category, mask) in checklist_upload_strategy(),
            noise in 0usize..3
        ) {
            let uploaded = mask.iter().filter(|u| **u).count();
            prop_assert_eq!(uploads_for(category, &mask, noise).len(), uploaded + noise);
        }

        #[test]
        fn generated_records_start_at_intake(record in claim_record_strategy()) {
            prop_assert_eq!(record.current_step, domain_claims::WorkflowStep::Intake);
            prop_assert!(record.trail.is_empty());
        }
    }
}
