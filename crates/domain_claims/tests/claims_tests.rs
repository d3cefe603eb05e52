//! Tests for claim records, document matching and the checklist

use std::collections::BTreeSet;

use domain_claims::{
    ChecklistEngine, ClaimCategory, ClaimField, ClaimRecord, DocumentMatcher, DocumentRef,
    RequiredDocument, UNKNOWN,
};
use test_utils::{ClaimRecordBuilder, DocumentFixtures};

// ============================================================================
// Claim Record Tests
// ============================================================================

mod record_tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = ClaimRecord::new("Pipe burst in the kitchen");

        assert_eq!(record.claimant_name, UNKNOWN);
        assert_eq!(record.incident_date, UNKNOWN);
        assert_eq!(record.claim_category, ClaimCategory::Unset);
        assert!(record.missing_documents.is_empty());
        assert!(!record.is_complete());
        assert!(record.id.to_string().starts_with("CLM-"));
    }

    #[test]
    fn test_unresolved_fields_in_order() {
        let record = ClaimRecordBuilder::new()
            .with_claimant_name(UNKNOWN)
            .with_incident_date("  ")
            .build();

        assert_eq!(
            record.unresolved_fields(),
            vec![ClaimField::ClaimantName, ClaimField::IncidentDate]
        );
    }

    #[test]
    fn test_other_category_is_unresolved() {
        let record = ClaimRecordBuilder::new()
            .with_category(ClaimCategory::Other)
            .build();

        assert_eq!(record.unresolved_fields(), vec![ClaimField::ClaimCategory]);
    }

    #[test]
    fn test_record_serializes_labels() {
        let mut record = ClaimRecordBuilder::new()
            .with_category(ClaimCategory::Auto)
            .build();
        record.missing_documents.insert(RequiredDocument::AccidentReport);

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["claim_category"], "Auto");
        assert_eq!(json["missing_documents"][0], "Accident Report");
        assert_eq!(json["current_step"], "intake");
    }

    #[test]
    fn test_cached_text_is_not_serialized() {
        let document = DocumentFixtures::document(RequiredDocument::Bills);

        let json = serde_json::to_value(&document).unwrap();

        assert!(json.get("text").is_none());
        assert_eq!(json["source"], "uploads/Bills.txt");
    }
}

// ============================================================================
// Category Tests
// ============================================================================

mod category_tests {
    use super::*;

    #[test]
    fn test_model_output_is_normalized() {
        assert_eq!(ClaimCategory::from_model_output(" Travel.\n"), ClaimCategory::Travel);
        assert_eq!(ClaimCategory::from_model_output("\"Life\""), ClaimCategory::Life);
    }

    #[test]
    fn test_model_output_is_case_sensitive() {
        assert_eq!(ClaimCategory::from_model_output("AUTO"), ClaimCategory::Other);
        assert_eq!(ClaimCategory::from_model_output(""), ClaimCategory::Other);
    }

    #[test]
    fn test_strict_parse_rejects_unset() {
        assert_eq!("Home".parse::<ClaimCategory>().unwrap(), ClaimCategory::Home);
        assert!("Unset".parse::<ClaimCategory>().is_err());
        assert!("home".parse::<ClaimCategory>().is_err());
    }
}

// ============================================================================
// Document Matching Tests
// ============================================================================

mod matcher_tests {
    use super::*;

    #[test]
    fn test_fixture_satisfies_its_kind() {
        for category in ClaimCategory::SUPPORTED {
            for kind in ChecklistEngine::required_documents(category) {
                let document = DocumentFixtures::document(*kind);
                assert!(
                    DocumentMatcher::satisfies(&document, *kind),
                    "{:?} fixture does not satisfy itself",
                    kind
                );
            }
        }
    }

    #[test]
    fn test_unextracted_document_satisfies_nothing() {
        let document = DocumentRef::new(DocumentFixtures::source_for(RequiredDocument::Bills));
        assert!(!DocumentMatcher::satisfies(&document, RequiredDocument::Bills));
    }

    #[test]
    fn test_cache_is_written_once() {
        let mut document = DocumentRef::new("uploads/receipt.txt");

        document.cache_text("Hotel receipt".to_string());
        document.cache_text("Something else".to_string());

        assert_eq!(document.text(), Some("Hotel receipt"));
    }
}

// ============================================================================
// Checklist Tests
// ============================================================================

mod checklist_tests {
    use super::*;

    #[test]
    fn test_auto_with_license_only() {
        let uploads = [DocumentFixtures::document(RequiredDocument::DriversLicense)];

        let missing = ChecklistEngine::compute_missing(ClaimCategory::Auto, &uploads);

        let expected: BTreeSet<_> = [
            RequiredDocument::VehicleRegistration,
            RequiredDocument::AccidentReport,
        ]
        .into_iter()
        .collect();
        assert_eq!(missing, expected);
    }

    #[test]
    fn test_one_document_can_satisfy_several_requirements() {
        let uploads = [DocumentRef::with_text(
            "uploads/combined.txt",
            "Police report 12, vehicle VIN 4411, driver license attached",
        )];

        assert!(ChecklistEngine::compute_missing(ClaimCategory::Auto, &uploads).is_empty());
    }

    #[test]
    fn test_other_and_unset_need_nothing() {
        assert!(ChecklistEngine::compute_missing(ClaimCategory::Other, &[]).is_empty());
        assert!(ChecklistEngine::compute_missing(ClaimCategory::Unset, &[]).is_empty());
    }

    #[test]
    fn test_satisfied_complements_missing() {
        let uploads = [
            DocumentFixtures::document(RequiredDocument::Itinerary),
            DocumentRef::with_text("uploads/blank.txt", DocumentFixtures::blank()),
        ];

        let satisfied = ChecklistEngine::satisfied(ClaimCategory::Travel, &uploads);
        let missing = ChecklistEngine::compute_missing(ClaimCategory::Travel, &uploads);

        assert_eq!(satisfied.into_iter().collect::<Vec<_>>(), vec![RequiredDocument::Itinerary]);
        assert_eq!(missing.len(), 2);
    }
}
