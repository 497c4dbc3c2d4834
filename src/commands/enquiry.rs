//! Enquiry Commands
//!
//! Hands a submitted enquiry to the transport and turns the outcome into a
//! notice for the visitor.

use triovoyage_core::{EnquiryForm, EnquiryTransport, TransportError};

use crate::store::NoticeKind;

/// Deliver `enquiry`, returning the notice to show.
pub fn deliver_enquiry(transport: &dyn EnquiryTransport, enquiry: &EnquiryForm) -> (NoticeKind, String) {
    match transport.deliver(enquiry) {
        Ok(receipt) => (NoticeKind::Success, receipt.acknowledgment),
        Err(err) => {
            tracing::error!(error = %err, retryable = err.is_retryable(), "enquiry delivery failed");
            (NoticeKind::Failure, failure_text(&err))
        }
    }
}

fn failure_text(err: &TransportError) -> String {
    match err {
        TransportError::Unavailable(_) => {
            "We couldn't send your enquiry right now. Please try again in a moment.".to_string()
        }
        TransportError::Rejected(reason) => format!("Your enquiry was not accepted: {}", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triovoyage_core::{LocalAcknowledgment, Receipt};

    struct Offline;

    impl EnquiryTransport for Offline {
        fn deliver(&self, _enquiry: &EnquiryForm) -> Result<Receipt, TransportError> {
            Err(TransportError::Unavailable("no network".into()))
        }
    }

    struct Refusing;

    impl EnquiryTransport for Refusing {
        fn deliver(&self, _enquiry: &EnquiryForm) -> Result<Receipt, TransportError> {
            Err(TransportError::Rejected("duplicate enquiry".into()))
        }
    }

    #[test]
    fn test_receipt_becomes_success_notice() {
        let transport = LocalAcknowledgment::new("Thanks! We received your enquiry.");
        let (kind, text) = deliver_enquiry(&transport, &EnquiryForm::default());
        assert_eq!(kind, NoticeKind::Success);
        assert_eq!(text, "Thanks! We received your enquiry.");
    }

    #[test]
    fn test_failures_get_distinct_notices() {
        let (kind, offline) = deliver_enquiry(&Offline, &EnquiryForm::default());
        assert_eq!(kind, NoticeKind::Failure);
        assert!(offline.contains("try again"));

        let (kind, refused) = deliver_enquiry(&Refusing, &EnquiryForm::default());
        assert_eq!(kind, NoticeKind::Failure);
        assert!(refused.ends_with("duplicate enquiry"));
        assert_ne!(offline, refused);
    }
}
