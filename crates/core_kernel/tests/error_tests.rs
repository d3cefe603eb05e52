//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{DocumentId, PortError};

#[test]
fn test_core_error_from_bad_identifier() {
    let result: Result<DocumentId, CoreError> = "DOC-not-a-uuid".parse();

    assert!(matches!(result, Err(CoreError::InvalidIdentifier(_))));
}

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("max_iterations must be positive");

    match &error {
        CoreError::Configuration(msg) => assert_eq!(msg, "max_iterations must be positive"),
        _ => panic!("Expected Configuration error"),
    }
    assert!(error.to_string().starts_with("Configuration error"));
}

#[test]
fn test_port_error_timeout_display() {
    let error = PortError::timeout("extract_fields", 250);

    assert_eq!(error.to_string(), "Timeout after 250ms: extract_fields");
    assert!(error.is_transient());
}

#[test]
fn test_port_error_unsupported_is_not_transient() {
    let error = PortError::unsupported_format("heic");

    assert!(error.is_unsupported());
    assert!(!error.is_transient());
}
