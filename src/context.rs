//! Application Context
//!
//! Shared state provided via Leptos Context API. Every UI event goes
//! through [`AppContext::dispatch`], which runs the core reducer and then
//! the effects it asks for.

use leptos::prelude::*;
use triovoyage_core::{
    reduce, Catalog, EnquiryField, EnquiryTransport, PackageRecord, SiteConfig, Transition, UiEffect,
    UiEvent,
};

use crate::commands;
use crate::store::{self, PageStore};

type SharedTransport = Box<dyn EnquiryTransport>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable package catalog
    catalog: StoredValue<Catalog>,
    /// Bundled site copy and settings
    site: StoredValue<SiteConfig>,
    /// Where submitted enquiries go
    transport: StoredValue<SharedTransport>,
    /// Reactive page state
    pub store: PageStore,
}

impl AppContext {
    pub fn new(catalog: Catalog, site: SiteConfig, transport: SharedTransport, store: PageStore) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            site: StoredValue::new(site),
            transport: StoredValue::new(transport),
            store,
        }
    }

    /// Apply a UI event. Rejected events are logged and leave the page as is.
    pub fn dispatch(&self, event: UiEvent) {
        tracing::debug!(?event, "dispatch");
        let current = store::store_ui(&self.store);
        let result = self.catalog.with_value(|catalog| reduce(&current, catalog, event));
        match result {
            Ok(Transition { state, effects }) => {
                store::store_set_ui(&self.store, state);
                for effect in effects {
                    self.run_effect(effect);
                }
            }
            Err(err) => tracing::warn!(error = %err, "ui event rejected"),
        }
    }

    fn run_effect(&self, effect: UiEffect) {
        match effect {
            UiEffect::ScrollToTop => commands::scroll_to_top(),
            UiEffect::DeliverEnquiry(enquiry) => {
                let (kind, text) = self
                    .transport
                    .with_value(|transport| commands::deliver_enquiry(transport.as_ref(), &enquiry));
                let timeout = self.site.with_value(|site| site.notice_timeout_ms);
                store::store_show_notice(&self.store, kind, text, timeout);
            }
        }
    }

    /// Read a value out of the site config
    pub fn site<T>(&self, f: impl FnOnce(&SiteConfig) -> T) -> T {
        self.site.with_value(f)
    }

    /// Packages matching the current query (tracks the query)
    pub fn visible_packages(&self) -> Vec<PackageRecord> {
        let query = store::store_query(&self.store);
        self.catalog
            .with_value(|catalog| catalog.filter(&query).cloned().collect())
    }

    /// Package shown in the detail modal (tracks the selection)
    pub fn selected_package(&self) -> Option<PackageRecord> {
        let selection = store::store_selection(&self.store);
        self.catalog
            .with_value(|catalog| selection.and_then(|id| catalog.get(id).cloned()))
    }

    pub fn query(&self) -> String {
        store::store_query(&self.store)
    }

    pub fn form_value(&self, field: EnquiryField) -> String {
        store::store_form_value(&self.store, field)
    }
}
