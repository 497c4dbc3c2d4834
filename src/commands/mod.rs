//! Browser Commands
//!
//! Side effects requested by the page reducer, run against the browser.

mod enquiry;
mod window;

// Re-export all public items
pub use enquiry::*;
pub use window::*;
