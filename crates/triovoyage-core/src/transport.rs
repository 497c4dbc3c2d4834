//! Enquiry Transport
//!
//! Where submitted enquiries go. The site currently has no backend, so the
//! only transport acknowledges locally.

use thiserror::Error;

use crate::enquiry::EnquiryForm;

/// Confirmation returned for a delivered enquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Text shown to the visitor
    pub acknowledgment: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Delivery could not be attempted; trying again may work.
    #[error("enquiry transport unavailable: {0}")]
    Unavailable(String),

    /// The receiving side refused the enquiry.
    #[error("enquiry rejected: {0}")]
    Rejected(String),
}

impl TransportError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Unavailable(_))
    }
}

/// Delivers a submitted enquiry somewhere
pub trait EnquiryTransport: Send + Sync {
    fn deliver(&self, enquiry: &EnquiryForm) -> Result<Receipt, TransportError>;
}

/// Logs the enquiry and acknowledges it immediately
#[derive(Debug, Clone)]
pub struct LocalAcknowledgment {
    message: String,
}

impl LocalAcknowledgment {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl EnquiryTransport for LocalAcknowledgment {
    fn deliver(&self, enquiry: &EnquiryForm) -> Result<Receipt, TransportError> {
        tracing::info!(
            has_phone = !enquiry.phone.is_empty(),
            message_len = enquiry.message.len(),
            "enquiry received"
        );
        tracing::debug!(
            name = %enquiry.name,
            email = %enquiry.email,
            phone = %enquiry.phone,
            "enquiry contact"
        );
        Ok(Receipt {
            acknowledgment: self.message.clone(),
        })
    }
}
