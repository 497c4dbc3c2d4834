//! TrioVoyage Core
//!
//! Rendering-independent layer of the storefront:
//! - models: package records
//! - catalog: the immutable package list and its text filter
//! - enquiry: contact form fields and submission rules
//! - state: page reducer producing effects for the UI to run
//! - transport: hand-off point for submitted enquiries
//! - config: bundled site settings
//!
//! Nothing here touches the DOM, so every rule is testable natively.

mod catalog;
mod config;
mod enquiry;
mod error;
mod models;
mod state;
mod transport;

pub use catalog::Catalog;
pub use config::{ContactDetails, Feature, HeroCopy, InfoEntry, SiteConfig, WhyUsCopy};
pub use enquiry::{EnquiryField, EnquiryForm};
pub use error::{DomainError, DomainResult};
pub use models::{PackageId, PackageRecord};
pub use state::{reduce, Selection, Transition, UiEffect, UiEvent, UiState};
pub use transport::{EnquiryTransport, LocalAcknowledgment, Receipt, TransportError};
