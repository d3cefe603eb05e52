//! Ports and Adapters Infrastructure
//!
//! The claim workflow never talks to a language model, an OCR engine or a file
//! store directly. Each of those capabilities is a port trait defined in the
//! domain crate; adapters implement the trait and every adapter reports failure
//! through the single [`PortError`] type defined here.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Claim Workflow                   │
//! │  (intake, validate, categorize, checklist)    │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │   Port Traits (Classifier, TextExtractor)     │
//! └──────────────────────────────────────────────┘
//!            ▲                        ▲
//!   ┌────────┴────────┐      ┌───────┴────────┐
//!   │  Local Adapter   │      │  Model / OCR   │
//!   │ (keywords, .txt) │      │   services     │
//!   └─────────────────┘      └────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Adapters map their own failures onto these variants so the workflow can
/// decide, in one place, how to degrade.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The adapter cannot read this kind of input
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        format: String,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The external system answered with something that could not be interpreted
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates an UnsupportedFormat error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        PortError::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl Into<String>, duration_ms: u64) -> Self {
        PortError::Timeout {
            operation: operation.into(),
            duration_ms,
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error wrapping a source error
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Timeout { .. } | PortError::ServiceUnavailable { .. }
        )
    }

    /// Returns true if the input itself cannot be handled by the adapter
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PortError::UnsupportedFormat { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across concurrently running claims, so every
/// implementation must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}
