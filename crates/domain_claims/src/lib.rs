//! Claim Intake Domain
//!
//! This crate takes a free-text claim plus uploaded documents and produces a
//! verdict: it fills the structured claim fields, picks a category, checks the
//! uploads against that category's document checklist, and writes a note for
//! the claimant.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Intake -> Validate -> Categorize -> Checklist -> ProcessCategory -> Done
//!              |                        ^    |
//!              v                        |    v
//!     RequestAdditionalInfo          RequestMissing
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::adapters::{KeywordClassifier, PlainTextExtractor};
//! use domain_claims::{ClaimIntakeService, ClaimSubmission, ClaimWorkflow, DocumentRef};
//! use std::sync::Arc;
//!
//! let workflow = ClaimWorkflow::new(
//!     Arc::new(KeywordClassifier::new()),
//!     Arc::new(PlainTextExtractor::new()),
//! );
//! let service = ClaimIntakeService::new(workflow);
//!
//! let record = service
//!     .process_claim(
//!         ClaimSubmission::new("I was in a car accident last week")
//!             .claimant_name("John Doe")
//!             .incident_date("2025-08-10")
//!             .document(DocumentRef::new("uploads/license.txt")),
//!     )
//!     .await;
//! println!("{:?}: {}", record.validation_status, record.notes);
//! ```

pub mod claim;
pub mod document;
pub mod checklist;
pub mod notes;
pub mod ports;
pub mod adapters;
pub mod stubs;
pub mod workflow;
pub mod runner;
pub mod service;
pub mod config;
pub mod error;

pub use claim::{ClaimCategory, ClaimField, ClaimRecord, ValidationStatus, WorkflowStep, UNKNOWN};
pub use document::{DocumentMatcher, DocumentRef, RequiredDocument};
pub use checklist::ChecklistEngine;
pub use notes::{Note, NotesFormatter};
pub use ports::{Classifier, ExtractedFields, NoResubmissions, ResubmissionSource, TextExtractor};
pub use workflow::{transition, ClaimWorkflow};
pub use runner::WorkflowRunner;
pub use service::{ClaimIntakeService, ClaimSubmission};
pub use config::WorkflowConfig;
pub use error::ClaimError;
