//! Uploaded documents, required document kinds, and keyword matching

use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;

/// Reference to an uploaded document
///
/// `source` is whatever the caller uses to locate the file (usually a path).
/// The extracted text is cached on the reference the first time it is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: DocumentId,
    pub source: String,
    #[serde(default, skip_serializing)]
    text: Option<String>,
}

impl DocumentRef {
    /// Creates a reference whose text has not been extracted yet
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new_v7(),
            source: source.into(),
            text: None,
        }
    }

    /// Creates a reference with text already available
    pub fn with_text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new_v7(),
            source: source.into(),
            text: Some(text.into()),
        }
    }

    /// Cached text, if extraction has happened
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns true once the text cache is populated
    pub fn is_extracted(&self) -> bool {
        self.text.is_some()
    }

    /// Stores extracted text. A populated cache is never overwritten.
    pub fn cache_text(&mut self, text: String) -> &str {
        self.text.get_or_insert(text)
    }

    /// Lower-cased file extension of the source, if any
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.source)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// A document kind that a category's checklist can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequiredDocument {
    #[serde(rename = "Driver's License")]
    DriversLicense,
    #[serde(rename = "Vehicle Registration")]
    VehicleRegistration,
    #[serde(rename = "Accident Report")]
    AccidentReport,
    #[serde(rename = "Proof of Ownership")]
    ProofOfOwnership,
    #[serde(rename = "Damage Photos")]
    DamagePhotos,
    #[serde(rename = "Repair Estimates")]
    RepairEstimates,
    #[serde(rename = "Medical Report")]
    MedicalReport,
    #[serde(rename = "Bills")]
    Bills,
    #[serde(rename = "Insurance Card")]
    InsuranceCard,
    #[serde(rename = "Itinerary")]
    Itinerary,
    #[serde(rename = "Proof of Expense")]
    ProofOfExpense,
    #[serde(rename = "Travel Insurance Policy")]
    TravelInsurancePolicy,
    #[serde(rename = "Death Certificate")]
    DeathCertificate,
    #[serde(rename = "Policy Document")]
    PolicyDocument,
    #[serde(rename = "ID Proof")]
    IdProof,
}

impl RequiredDocument {
    /// Label shown to claimants
    pub fn label(&self) -> &'static str {
        match self {
            RequiredDocument::DriversLicense => "Driver's License",
            RequiredDocument::VehicleRegistration => "Vehicle Registration",
            RequiredDocument::AccidentReport => "Accident Report",
            RequiredDocument::ProofOfOwnership => "Proof of Ownership",
            RequiredDocument::DamagePhotos => "Damage Photos",
            RequiredDocument::RepairEstimates => "Repair Estimates",
            RequiredDocument::MedicalReport => "Medical Report",
            RequiredDocument::Bills => "Bills",
            RequiredDocument::InsuranceCard => "Insurance Card",
            RequiredDocument::Itinerary => "Itinerary",
            RequiredDocument::ProofOfExpense => "Proof of Expense",
            RequiredDocument::TravelInsurancePolicy => "Travel Insurance Policy",
            RequiredDocument::DeathCertificate => "Death Certificate",
            RequiredDocument::PolicyDocument => "Policy Document",
            RequiredDocument::IdProof => "ID Proof",
        }
    }

    /// Words whose presence in a document's text marks it as this kind
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RequiredDocument::DriversLicense => {
                &["Driver License", "DL", "Date of Birth", "License Number"]
            }
            RequiredDocument::VehicleRegistration => &["Registration", "VIN", "Vehicle", "Owner"],
            RequiredDocument::AccidentReport => &["Police Report", "Accident", "Report Number"],
            RequiredDocument::ProofOfOwnership => &["Ownership", "Deed", "Title", "Property"],
            RequiredDocument::DamagePhotos => &["Damage", "Repair", "Photo", "Image"],
            RequiredDocument::RepairEstimates => &["Estimate", "Repair", "Cost"],
            RequiredDocument::MedicalReport => {
                &["Medical Report", "Hospital", "Diagnosis", "Patient"]
            }
            RequiredDocument::Bills => &["Invoice", "Bill", "Charge", "Payment"],
            RequiredDocument::InsuranceCard => &["Insurance", "Policy", "Card"],
            RequiredDocument::Itinerary => &["Itinerary", "Flight", "Travel", "Schedule"],
            RequiredDocument::ProofOfExpense => &["Receipt", "Expense", "Invoice"],
            RequiredDocument::TravelInsurancePolicy => &["Insurance", "Policy", "Coverage"],
            RequiredDocument::DeathCertificate => &["Death Certificate", "Deceased", "Record"],
            RequiredDocument::PolicyDocument => &["Policy", "Contract", "Coverage"],
            RequiredDocument::IdProof => &["ID", "Passport", "License", "Identity"],
        }
    }
}

/// Keyword matcher for extracted document text
pub struct DocumentMatcher;

impl DocumentMatcher {
    /// Returns true iff any keyword occurs in `text`, ignoring case
    ///
    /// Plain substring containment; no stemming or fuzzy matching. An empty
    /// keyword list never matches, and blank keywords are ignored.
    pub fn matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
        if keywords.is_empty() || text.is_empty() {
            return false;
        }
        let haystack = text.to_lowercase();
        keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .any(|k| haystack.contains(&k.to_lowercase()))
    }

    /// Returns true if the document's cached text identifies it as `kind`
    ///
    /// A document whose text was never extracted is treated as empty.
    pub fn satisfies(document: &DocumentRef, kind: RequiredDocument) -> bool {
        Self::matches(document.text().unwrap_or_default(), kind.keywords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_case() {
        assert!(DocumentMatcher::matches("POLICE REPORT #4411", &["police report"]));
        assert!(DocumentMatcher::matches("vin: 1HGCM", &["VIN"]));
    }

    #[test]
    fn test_matches_any_keyword() {
        let keywords = ["Invoice", "Bill", "Charge"];
        assert!(DocumentMatcher::matches("Total charge due", &keywords));
        assert!(!DocumentMatcher::matches("Discharge summary", &["Invoice"]));
    }

    #[test]
    fn test_empty_keywords_never_match() {
        let none: [&str; 0] = [];
        assert!(!DocumentMatcher::matches("anything at all", &none));
        assert!(!DocumentMatcher::matches("anything at all", &["", "  "]));
    }

    #[test]
    fn test_empty_text_never_matches() {
        assert!(!DocumentMatcher::matches("", &["report"]));
    }

    #[test]
    fn test_unextracted_document_is_empty() {
        let doc = DocumentRef::new("uploads/scan.pdf");
        assert!(!DocumentMatcher::satisfies(&doc, RequiredDocument::AccidentReport));
    }

    #[test]
    fn test_cache_is_written_once() {
        let mut doc = DocumentRef::new("uploads/a.txt");
        assert!(!doc.is_extracted());

        doc.cache_text("first".to_string());
        doc.cache_text("second".to_string());

        assert_eq!(doc.text(), Some("first"));
    }

    #[test]
    fn test_extension() {
        assert_eq!(DocumentRef::new("a/B.TXT").extension().as_deref(), Some("txt"));
        assert_eq!(DocumentRef::new("no_extension").extension(), None);
    }

    #[test]
    fn test_required_document_serializes_as_label() {
        let json = serde_json::to_string(&RequiredDocument::DriversLicense).unwrap();
        assert_eq!(json, "\"Driver's License\"");
    }
}
