//! Domain Errors
//!
//! Shared error type for catalog, reducer and configuration operations.

use thiserror::Error;

use crate::enquiry::EnquiryField;
use crate::models::PackageId;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A form update named a field the enquiry form does not have.
    #[error("unknown enquiry field '{0}'")]
    InvalidField(String),

    /// A required field was blank at submit time.
    #[error("enquiry field '{0}' is required")]
    ValidationFailed(EnquiryField),

    /// A selection referred to a package outside the catalog.
    #[error("package {0} is not in the catalog")]
    UnknownPackage(PackageId),

    /// Two catalog records share an id.
    #[error("package id {0} appears more than once in the catalog")]
    DuplicatePackage(PackageId),

    /// Bundled JSON data could not be parsed.
    #[error("malformed bundled data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}
