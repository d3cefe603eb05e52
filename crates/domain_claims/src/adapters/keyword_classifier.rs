//! Keyword-based classifier
//!
//! Categorizes an incident description by the first rule whose keywords
//! appear in it, checked in a fixed order. Field extraction only echoes the
//! description; name and date are left for the caller to supply.

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::claim::ClaimCategory;
use crate::document::DocumentMatcher;
use crate::ports::{Classifier, ExtractedFields};

/// Ordered category rules; the first match wins
const DEFAULT_RULES: [(ClaimCategory, &[&str]); 5] = [
    (ClaimCategory::Auto, &["car", "accident"]),
    (ClaimCategory::Home, &["house", "fire"]),
    (ClaimCategory::Health, &["hospital", "surgery"]),
    (ClaimCategory::Travel, &["travel", "flight"]),
    (ClaimCategory::Life, &["life", "death"]),
];

/// Classifier adapter driven by keyword rules
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<(ClaimCategory, Vec<String>)>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Creates a classifier with the standard rule table
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(category, words)| {
                    (*category, words.iter().map(|w| w.to_string()).collect())
                })
                .collect(),
        }
    }

    /// Appends a rule, checked after the existing ones
    pub fn with_rule<I, S>(mut self, category: ClaimCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .push((category, keywords.into_iter().map(Into::into).collect()));
        self
    }

    /// Category for a description, without going through the port
    pub fn classify(&self, description: &str) -> ClaimCategory {
        self.rules
            .iter()
            .find(|(_, keywords)| DocumentMatcher::matches(description, keywords))
            .map(|(category, _)| *category)
            .unwrap_or(ClaimCategory::Other)
    }
}

impl DomainPort for KeywordClassifier {}

#[async_trait]
impl Classifier for KeywordClassifier {
    async fn extract_fields(&self, free_text: &str) -> Result<ExtractedFields, PortError> {
        Ok(ExtractedFields {
            incident_description: Some(free_text.to_string()),
            ..Default::default()
        }
        .normalized())
    }

    async fn categorize(&self, incident_description: &str) -> Result<ClaimCategory, PortError> {
        Ok(self.classify(incident_description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_standard_rules() {
        let classifier = KeywordClassifier::new();

        assert_eq!(classifier.classify("I was in a car accident last week"), ClaimCategory::Auto);
        assert_eq!(classifier.classify("Hospital surgery for leg fracture"), ClaimCategory::Health);
        assert_eq!(classifier.classify("Kitchen FIRE"), ClaimCategory::Home);
        assert_eq!(classifier.classify("My flight was cancelled"), ClaimCategory::Travel);
        assert_eq!(classifier.classify("Death of the policyholder"), ClaimCategory::Life);
        assert_eq!(
            classifier.classify("Lost my antique collection due to flood"),
            ClaimCategory::Other
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("car fire"), ClaimCategory::Auto);
    }

    #[test]
    fn test_custom_rule() {
        let classifier = KeywordClassifier::new().with_rule(ClaimCategory::Home, ["flood"]);
        assert_eq!(classifier.classify("Basement flood"), ClaimCategory::Home);
    }

    #[tokio::test]
    async fn test_extract_fields_echoes_description() {
        let classifier = KeywordClassifier::new();

        let fields = classifier.extract_fields("  Hail damage to roof ").await.unwrap();

        assert_eq!(fields.incident_description.as_deref(), Some("Hail damage to roof"));
        assert_eq!(fields.claimant_name, None);
    }

    #[tokio::test]
    async fn test_extract_fields_blank_input() {
        let fields = KeywordClassifier::new().extract_fields("   ").await.unwrap();
        assert_eq!(fields.incident_description, None);
    }
}
