//! Pre-built Test Fixtures
//!
//! Document texts and reference submissions. Each document text matches the
//! keywords of exactly one requirement within its own category, so a test
//! can upload any subset of a checklist and know precisely what is missing.

use domain_claims::{ClaimCategory, ClaimSubmission, DocumentRef, RequiredDocument};

/// Fixture for document text
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Text that satisfies `kind` and no other requirement of its category
    pub fn text_for(kind: RequiredDocument) -> &'static str {
        match kind {
            RequiredDocument::DriversLicense => {
                "State driver license. License number D1234567. Date of birth 1988-03-14."
            }
            RequiredDocument::VehicleRegistration => {
                "Certificate of registration. VIN 1HGCM82633A004352. Registered owner: J. Doe."
            }
            RequiredDocument::AccidentReport => "Police report filed. Report number 2025-0815.",
            RequiredDocument::ProofOfOwnership => {
                "Warranty deed recorded with the county. Title holder: Jane Roe."
            }
            RequiredDocument::DamagePhotos => "Photo set 1 of 3 showing water damage in the kitchen.",
            RequiredDocument::RepairEstimates => "Contractor estimate. Total cost: $4,200.",
            RequiredDocument::MedicalReport => {
                "Medical report. Patient: Jane Roe. Diagnosis: fractured tibia."
            }
            RequiredDocument::Bills => "Invoice #7781. Amount due for services rendered.",
            RequiredDocument::InsuranceCard => "Member insurance card. Group 0042.",
            RequiredDocument::Itinerary => "Flight itinerary: LHR to JFK, 12 Aug.",
            RequiredDocument::ProofOfExpense => "Hotel receipt for two nights.",
            RequiredDocument::TravelInsurancePolicy => "Insurance coverage certificate, plan 22.",
            RequiredDocument::DeathCertificate => "Death certificate. Name of deceased: John Roe.",
            RequiredDocument::PolicyDocument => "Life policy contract number 55-1020.",
            RequiredDocument::IdProof => "Passport of John Roe, nationality GB.",
        }
    }

    /// Text that matches no requirement at all
    pub fn blank() -> &'static str {
        "Blank page."
    }

    /// An already-extracted document satisfying `kind`
    pub fn document(kind: RequiredDocument) -> DocumentRef {
        DocumentRef::with_text(format!("uploads/{:?}.txt", kind), Self::text_for(kind))
    }

    /// An unextracted reference whose source names `kind`
    pub fn source_for(kind: RequiredDocument) -> String {
        format!("uploads/{:?}.pdf", kind)
    }
}

/// Fixture for the reference claim submissions
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    pub const CLAIMANT: &'static str = "John Doe";
    pub const INCIDENT_DATE: &'static str = "2025-08-10";

    /// Car accident with only a driver's license uploaded
    pub fn auto_with_license_only() -> ClaimSubmission {
        ClaimSubmission::new("I was in a car accident last week")
            .claimant_name(Self::CLAIMANT)
            .incident_date(Self::INCIDENT_DATE)
            .document(DocumentFixtures::document(RequiredDocument::DriversLicense))
    }

    /// Hospital claim with the full health checklist uploaded
    pub fn health_complete() -> ClaimSubmission {
        ClaimSubmission::new("Hospital surgery for leg fracture")
            .claimant_name(Self::CLAIMANT)
            .incident_date(Self::INCIDENT_DATE)
            .document(DocumentFixtures::document(RequiredDocument::MedicalReport))
            .document(DocumentFixtures::document(RequiredDocument::Bills))
            .document(DocumentFixtures::document(RequiredDocument::InsuranceCard))
    }

    /// Claim no category rule recognises
    pub fn uncategorizable() -> ClaimSubmission {
        ClaimSubmission::new("Lost my antique collection due to flood")
            .claimant_name(Self::CLAIMANT)
            .incident_date(Self::INCIDENT_DATE)
            .document(DocumentRef::with_text("uploads/flood.txt", "Flood damage report"))
    }

    /// Claim with neither name nor date
    pub fn anonymous() -> ClaimSubmission {
        ClaimSubmission::new("I was in a car accident last week")
            .claimant_name("Unknown")
            .incident_date("Unknown")
    }

    /// A submission for `category` with every required document uploaded
    pub fn complete(category: ClaimCategory) -> ClaimSubmission {
        let description = match category {
            ClaimCategory::Auto => "Rear-ended by a car at a junction",
            ClaimCategory::Home => "Kitchen fire spread to the hallway",
            ClaimCategory::Health => "Emergency surgery after a fall",
            ClaimCategory::Travel => "My flight was cancelled and I paid for a hotel",
            ClaimCategory::Life => "Death of the policyholder",
            ClaimCategory::Other | ClaimCategory::Unset => "Lost my antique collection",
        };
        domain_claims::ChecklistEngine::required_documents(category)
            .iter()
            .fold(
                ClaimSubmission::new(description)
                    .claimant_name(Self::CLAIMANT)
                    .incident_date(Self::INCIDENT_DATE),
                |submission, kind| submission.document(DocumentFixtures::document(*kind)),
            )
    }
}
