//! Core Kernel - Foundational types for the claim intake system
//!
//! This crate provides the building blocks shared by the domain and interface crates:
//! - Strongly-typed identifiers for claims and uploaded documents
//! - The common error type and the port error used by all external adapters
//! - Marker traits for the ports and adapters boundary

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ClaimId, DocumentId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};
