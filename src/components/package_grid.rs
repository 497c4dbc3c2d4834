//! Package Grid
//!
//! Featured packages filtered by the current search query.

use leptos::prelude::*;
use triovoyage_core::{PackageRecord, UiEvent};

use crate::context::AppContext;

/// Category chips; shown but not yet backed by package regions
const CATEGORIES: &[&str] = &["All", "Europe", "Asia"];

#[component]
pub fn PackageGrid() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <section id="packages" class="max-w-7xl mx-auto px-6 py-12">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h3 class="text-2xl font-bold">"Featured Packages"</h3>
                    <p class="text-sm text-slate-600">"Popular handpicked itineraries for your next holiday."</p>
                </div>
                <div class="hidden md:flex gap-3">
                    {CATEGORIES.iter().map(|label| view! {
                        <button type="button" class="px-4 py-2 rounded-full border">{*label}</button>
                    }).collect_view()}
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <For
                    each=move || ctx.visible_packages()
                    key=|pkg| pkg.id
                    children=move |pkg: PackageRecord| view! { <PackageCard package=pkg /> }
                />
            </div>

            <Show when=move || ctx.visible_packages().is_empty()>
                <p class="text-sm text-slate-500">"No packages match your search."</p>
            </Show>
        </section>
    }
}

/// Single package card
#[component]
pub fn PackageCard(package: PackageRecord) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let id = package.id;
    let image = format!("background-image: url('{}')", package.image_url);

    view! {
        <article class="bg-white rounded-2xl shadow hover:shadow-lg overflow-hidden">
            <div class="h-44 bg-cover bg-center" style=image></div>
            <div class="p-5">
                <div class="flex items-start justify-between">
                    <div>
                        <h4 class="text-xl font-semibold">{package.title}</h4>
                        <p class="text-sm text-slate-500">{package.subtitle}</p>
                    </div>
                    <div class="text-right">
                        <div class="text-lg font-bold">{package.price}</div>
                        <div class="text-xs text-slate-400">"per person"</div>
                    </div>
                </div>

                <p class="mt-3 text-sm text-slate-600">{package.summary}</p>
                <ul class="mt-3 text-sm text-slate-600 space-y-1">
                    {package.bullets.into_iter().map(|bullet| view! { <li>"• " {bullet}</li> }).collect_view()}
                </ul>

                <div class="mt-4 flex items-center gap-3">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md bg-sky-600 text-white"
                        on:click=move |_| ctx.dispatch(UiEvent::ViewDetails(id))
                    >
                        "View Details"
                    </button>
                    <button type="button" class="px-4 py-2 rounded-md border">"Book Now"</button>
                </div>
            </div>
        </article>
    }
}
