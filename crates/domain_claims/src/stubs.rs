//! In-memory port implementations
//!
//! Deterministic stand-ins for the classifier, the text extractor and the
//! resubmission feed. Used by the test suites and by callers that want to
//! exercise the workflow without external services.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::ClaimCategory;
use crate::document::DocumentRef;
use crate::ports::{Classifier, ExtractedFields, ResubmissionSource, TextExtractor};

/// How a stub answers
#[derive(Debug, Clone)]
enum Reply<T> {
    Value(T),
    Unavailable,
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self, operation: &str) -> Result<T, PortError> {
        match self {
            Reply::Value(value) => Ok(value.clone()),
            Reply::Unavailable => Err(PortError::ServiceUnavailable {
                service: format!("stub {}", operation),
            }),
            Reply::Malformed => Err(PortError::transformation(format!(
                "stub {} returned malformed output",
                operation
            ))),
        }
    }
}

/// Classifier with canned answers
#[derive(Debug)]
pub struct StubClassifier {
    fields: Reply<ExtractedFields>,
    category: Reply<ClaimCategory>,
    delay: Option<Duration>,
    categorize_calls: AtomicUsize,
}

impl Default for StubClassifier {
    fn default() -> Self {
        Self {
            fields: Reply::Value(ExtractedFields::default()),
            category: Reply::Value(ClaimCategory::Other),
            delay: None,
            categorize_calls: AtomicUsize::new(0),
        }
    }
}

impl StubClassifier {
    /// Extracts nothing and categorizes everything as `Other`
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `categorize` with `category`
    pub fn categorizing_as(mut self, category: ClaimCategory) -> Self {
        self.category = Reply::Value(category);
        self
    }

    /// Answers `extract_fields` with `fields`
    pub fn extracting(mut self, fields: ExtractedFields) -> Self {
        self.fields = Reply::Value(fields);
        self
    }

    /// Both operations fail as if the service were down
    pub fn unavailable(mut self) -> Self {
        self.fields = Reply::Unavailable;
        self.category = Reply::Unavailable;
        self
    }

    /// Both operations fail as if the service answered with garbage
    pub fn malformed(mut self) -> Self {
        self.fields = Reply::Malformed;
        self.category = Reply::Malformed;
        self
    }

    /// Sleeps before every answer
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `categorize` calls seen
    pub fn categorize_calls(&self) -> usize {
        self.categorize_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl DomainPort for StubClassifier {}

#[async_trait]
impl Classifier for StubClassifier {
    async fn extract_fields(&self, _free_text: &str) -> Result<ExtractedFields, PortError> {
        self.pause().await;
        self.fields.resolve("extract_fields")
    }

    async fn categorize(&self, _incident_description: &str) -> Result<ClaimCategory, PortError> {
        self.categorize_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.category.resolve("categorize")
    }
}

/// Text extractor backed by a map from document source to text
///
/// Sources not in the map are reported as an unsupported format.
#[derive(Debug, Default)]
pub struct StaticTextExtractor {
    texts: HashMap<String, Reply<String>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the text returned for `source`
    pub fn with_text(mut self, source: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(source.into(), Reply::Value(text.into()));
        self
    }

    /// Makes extraction of `source` fail as if the service were down
    pub fn failing(mut self, source: impl Into<String>) -> Self {
        self.texts.insert(source.into(), Reply::Unavailable);
        self
    }

    /// Sleeps before every answer
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `extract` calls seen
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DomainPort for StaticTextExtractor {}

#[async_trait]
impl TextExtractor for StaticTextExtractor {
    async fn extract(&self, document: &DocumentRef) -> Result<String, PortError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.texts.get(&document.source) {
            Some(reply) => reply.resolve("extract"),
            None => Err(PortError::unsupported_format(
                document.extension().unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

/// Resubmission feed that replays a fixed script of uploads
///
/// Each poll pops the next batch, whatever the claim. Once the script runs
/// out, either nothing more arrives or, with [`repeat_empty`](Self::repeat_empty),
/// the claimant keeps resubmitting without adding anything.
#[derive(Debug, Default)]
pub struct ScriptedResubmissions {
    uploads: Mutex<VecDeque<Vec<DocumentRef>>>,
    repeat_empty: bool,
    polls: AtomicUsize,
}

impl ScriptedResubmissions {
    pub fn new(uploads: impl IntoIterator<Item = Vec<DocumentRef>>) -> Self {
        Self {
            uploads: Mutex::new(uploads.into_iter().collect()),
            repeat_empty: false,
            polls: AtomicUsize::new(0),
        }
    }

    /// After the script runs out, every poll yields an empty resubmission
    pub fn repeat_empty(mut self) -> Self {
        self.repeat_empty = true;
        self
    }

    /// Number of polls seen
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

impl DomainPort for ScriptedResubmissions {}

#[async_trait]
impl ResubmissionSource for ScriptedResubmissions {
    async fn next_upload(&self, _claim_id: ClaimId) -> Option<Vec<DocumentRef>> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let next = self.uploads.lock().await.pop_front();
        match next {
            Some(batch) => Some(batch),
            None if self.repeat_empty => Some(Vec::new()),
            None => None,
        }
    }
}
