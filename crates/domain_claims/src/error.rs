//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while a claim moves through intake
///
/// Everything except `WorkflowExhausted` is recovered inside the step that
/// raised it; none of these ever escape [`WorkflowRunner::run`](crate::runner::WorkflowRunner::run).
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Field {field} unresolved: {reason}")]
    FieldUnresolved { field: &'static str, reason: String },

    #[error("Unsupported document format: {source_ref}")]
    UnsupportedDocumentFormat { source_ref: String },

    #[error("Workflow exhausted after {iterations} document requests")]
    WorkflowExhausted { iterations: u32 },

    #[error("External service error: {0}")]
    ExternalService(#[from] PortError),
}

impl ClaimError {
    /// Wraps a port failure, singling out unreadable documents
    pub fn from_extraction(source_ref: &str, error: PortError) -> Self {
        if error.is_unsupported() {
            ClaimError::UnsupportedDocumentFormat {
                source_ref: source_ref.to_string(),
            }
        } else {
            ClaimError::ExternalService(error)
        }
    }

    /// Returns true if a later attempt could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ClaimError::ExternalService(e) if e.is_transient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extraction_is_named() {
        let error = ClaimError::from_extraction("scan.heic", PortError::unsupported_format("heic"));

        assert!(matches!(error, ClaimError::UnsupportedDocumentFormat { .. }));
        assert_eq!(error.to_string(), "Unsupported document format: scan.heic");
        assert!(!error.is_transient());
    }

    #[test]
    fn test_timeouts_are_transient() {
        let error = ClaimError::from_extraction("report.pdf", PortError::timeout("extract", 50));
        assert!(error.is_transient());
    }
}
