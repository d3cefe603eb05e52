//! Per-category document checklist

use std::collections::BTreeSet;

use crate::claim::ClaimCategory;
use crate::document::{DocumentMatcher, DocumentRef, RequiredDocument};

/// Computes which required documents a claim still lacks
pub struct ChecklistEngine;

impl ChecklistEngine {
    /// Documents required for a category
    ///
    /// `Other` and `Unset` have no checklist.
    pub fn required_documents(category: ClaimCategory) -> &'static [RequiredDocument] {
        use RequiredDocument::*;
        match category {
            ClaimCategory::Auto => &[DriversLicense, VehicleRegistration, AccidentReport],
            ClaimCategory::Home => &[ProofOfOwnership, DamagePhotos, RepairEstimates],
            ClaimCategory::Health => &[MedicalReport, Bills, InsuranceCard],
            ClaimCategory::Travel => &[Itinerary, ProofOfExpense, TravelInsurancePolicy],
            ClaimCategory::Life => &[DeathCertificate, PolicyDocument, IdProof],
            ClaimCategory::Other | ClaimCategory::Unset => &[],
        }
    }

    /// Required documents with no matching upload
    ///
    /// A requirement is met when any uploaded document's text matches its
    /// keywords, so upload order has no effect on the result.
    pub fn compute_missing(
        category: ClaimCategory,
        uploaded: &[DocumentRef],
    ) -> BTreeSet<RequiredDocument> {
        Self::required_documents(category)
            .iter()
            .copied()
            .filter(|&kind| !uploaded.iter().any(|doc| DocumentMatcher::satisfies(doc, kind)))
            .collect()
    }

    /// Required documents that at least one upload satisfies
    pub fn satisfied(
        category: ClaimCategory,
        uploaded: &[DocumentRef],
    ) -> BTreeSet<RequiredDocument> {
        let missing = Self::compute_missing(category, uploaded);
        Self::required_documents(category)
            .iter()
            .copied()
            .filter(|kind| !missing.contains(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> DocumentRef {
        DocumentRef::with_text("inline", text)
    }

    #[test]
    fn test_every_supported_category_has_three_requirements() {
        for category in ClaimCategory::SUPPORTED {
            assert_eq!(ChecklistEngine::required_documents(category).len(), 3);
        }
    }

    #[test]
    fn test_other_and_unset_have_no_requirements() {
        let docs = vec![doc("anything")];
        assert!(ChecklistEngine::compute_missing(ClaimCategory::Other, &docs).is_empty());
        assert!(ChecklistEngine::compute_missing(ClaimCategory::Unset, &[]).is_empty());
    }

    #[test]
    fn test_nothing_uploaded_means_everything_missing() {
        let missing = ChecklistEngine::compute_missing(ClaimCategory::Travel, &[]);
        assert_eq!(
            missing.into_iter().collect::<Vec<_>>(),
            vec![
                RequiredDocument::Itinerary,
                RequiredDocument::ProofOfExpense,
                RequiredDocument::TravelInsurancePolicy,
            ]
        );
    }

    #[test]
    fn test_one_document_can_satisfy_several_requirements() {
        let docs = vec![doc("Homeowner deed. Repair cost estimate attached.")];

        let missing = ChecklistEngine::compute_missing(ClaimCategory::Home, &docs);

        assert!(missing.is_empty());
    }

    #[test]
    fn test_satisfied_is_complement_of_missing() {
        let docs = vec![doc("Hospital admission, patient 88")];

        let satisfied = ChecklistEngine::satisfied(ClaimCategory::Health, &docs);
        let missing = ChecklistEngine::compute_missing(ClaimCategory::Health, &docs);

        assert_eq!(satisfied.len() + missing.len(), 3);
        assert!(satisfied.contains(&RequiredDocument::MedicalReport));
        assert!(missing.contains(&RequiredDocument::Bills));
    }
}
