//! Package Detail Modal
//!
//! Overlay for the selected package. Clicking the backdrop or "Close"
//! clears the selection.

use leptos::prelude::*;
use triovoyage_core::{PackageRecord, UiEvent};

use crate::context::AppContext;

#[component]
pub fn PackageModal(package: PackageRecord) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let close = move |_| ctx.dispatch(UiEvent::CloseDetails);
    let image = format!("background-image: url('{}')", package.image_url);

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-6" role="dialog" aria-modal="true">
            <div class="absolute inset-0 bg-black/40" on:click=close></div>
            <div class="relative max-w-4xl w-full bg-white rounded-2xl shadow-lg overflow-hidden">
                <div class="h-60 bg-cover bg-center" style=image></div>
                <div class="p-6">
                    <div class="flex items-start justify-between">
                        <div>
                            <h3 class="text-2xl font-bold">{package.title}</h3>
                            <p class="text-sm text-slate-500">{package.subtitle}</p>
                        </div>
                        <div class="text-right">
                            <div class="text-xl font-bold">{package.price}</div>
                            <div class="text-xs text-slate-400">"per person"</div>
                        </div>
                    </div>

                    <p class="mt-4 text-slate-600">{package.summary}</p>
                    <ul class="mt-4 list-disc list-inside text-slate-600">
                        {package.bullets.into_iter().map(|bullet| view! { <li>{bullet}</li> }).collect_view()}
                    </ul>

                    <div class="mt-6 flex items-center gap-3">
                        <button type="button" class="px-4 py-2 rounded-md bg-emerald-600 text-white">"Book This Trip"</button>
                        <button type="button" class="px-4 py-2 rounded-md border" on:click=close>"Close"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
