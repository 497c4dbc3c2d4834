//! TrioVoyage Storefront App
//!
//! Main application component: one page with header, hero, packages,
//! why-us, contact, footer and the package modal on top.

use leptos::prelude::*;
use reactive_stores::Store;
use triovoyage_core::{Catalog, EnquiryTransport, LocalAcknowledgment, SiteConfig};

use crate::components::{
    ContactSection, Hero, NoticeBanner, PackageGrid, PackageModal, SiteFooter, SiteHeader, WhyUs,
};
use crate::context::AppContext;
use crate::store::PageState;

#[component]
pub fn App(catalog: Catalog, site: SiteConfig) -> impl IntoView {
    // No backend yet: enquiries are acknowledged locally
    let transport: Box<dyn EnquiryTransport> = Box::new(LocalAcknowledgment::new(site.acknowledgment.clone()));
    let store = Store::new(PageState::default());
    let ctx = AppContext::new(catalog, site, transport, store);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-800">
            <NoticeBanner />
            <SiteHeader />
            <Hero />
            <PackageGrid />
            <WhyUs />
            <ContactSection />
            <SiteFooter />

            {move || ctx.selected_package().map(|package| view! { <PackageModal package=package /> })}
        </div>
    }
}
