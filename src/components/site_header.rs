//! Site Header
//!
//! Sticky brand bar with in-page anchor links.

use leptos::prelude::*;

use crate::context::AppContext;

/// In-page sections reachable from the header
const NAV_LINKS: &[(&str, &str)] = &[
    ("#packages", "Packages"),
    ("#why", "Why Us"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (brand, tagline) = ctx.site(|site| (site.brand.clone(), site.tagline.clone()));
    let mark = brand.chars().next().map(String::from).unwrap_or_default();

    view! {
        <header class="sticky top-0 z-40 bg-white/90 backdrop-blur shadow-sm">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-gradient-to-tr from-emerald-500 to-sky-500 flex items-center justify-center text-white font-bold">
                        {mark}
                    </div>
                    <div>
                        <h1 class="text-lg font-semibold">{brand}</h1>
                        <p class="text-xs text-slate-500">{tagline}</p>
                    </div>
                </div>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href class="hover:text-sky-600">{*label}</a>
                    }).collect_view()}
                    <a href="#contact" class="ml-4 px-4 py-2 rounded-full bg-sky-600 text-white text-sm shadow">
                        "Request Quote"
                    </a>
                </nav>
            </div>
        </header>
    }
}
