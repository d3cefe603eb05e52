//! Local Adapters for the Claims Domain
//!
//! Dependency-free implementations of the claim ports. They are good enough
//! to run the workflow end to end without a model or OCR service:
//!
//! - **KeywordClassifier**: categorizes by keywords in the incident description
//! - **PlainTextExtractor**: reads text files from disk
//!
//! Service-backed adapters implement the same traits and are passed to
//! [`ClaimWorkflow::new`](crate::ClaimWorkflow::new) in their place.

pub mod keyword_classifier;
pub mod plain_text;

pub use keyword_classifier::KeywordClassifier;
pub use plain_text::PlainTextExtractor;
