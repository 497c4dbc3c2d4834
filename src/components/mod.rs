//! UI Components
//!
//! Page sections rendered by the Leptos app.

mod contact_section;
mod hero;
mod notice_banner;
mod package_grid;
mod package_modal;
mod site_footer;
mod site_header;
mod why_us;

pub use contact_section::ContactSection;
pub use hero::Hero;
pub use notice_banner::NoticeBanner;
pub use package_grid::PackageGrid;
pub use package_modal::PackageModal;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use why_us::WhyUs;
