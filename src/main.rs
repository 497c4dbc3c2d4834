//! TrioVoyage Storefront Entry Point

mod app;
mod commands;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use tracing::level_filters::LevelFilter;
use triovoyage_core::{Catalog, SiteConfig};

fn main() {
    console_error_panic_hook::set_once();

    let site = match SiteConfig::bundled() {
        Ok(site) => site,
        Err(err) => {
            web_sys::console::error_1(&format!("[BOOT] site config unreadable: {}", err).into());
            return;
        }
    };

    let level = site.log_filter().unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("[BOOT] {}, falling back to info", err).into());
        LevelFilter::INFO
    });
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[BOOT] {}", err).into());
    }

    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "package catalog unreadable");
            return;
        }
    };

    tracing::info!(packages = catalog.len(), brand = %site.brand, "mounting storefront");
    mount_to_body(move || view! { <App catalog=catalog.clone() site=site.clone() /> });
}
