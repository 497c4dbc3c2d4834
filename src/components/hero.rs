//! Hero Section
//!
//! Headline banner with the package search box.

use leptos::prelude::*;
use triovoyage_core::UiEvent;

use crate::context::AppContext;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let hero = ctx.site(|site| site.hero.clone());
    let background = format!("background-image: url('{}')", hero.background_url);

    view! {
        <section class="relative">
            <div class="h-96 bg-cover bg-center flex items-center" style=background>
                <div class="max-w-7xl mx-auto px-6 w-full">
                    <div class="bg-white/70 rounded-2xl p-8 max-w-2xl backdrop-blur">
                        <h2 class="text-3xl md:text-4xl font-bold">{hero.headline}</h2>
                        <p class="mt-3 text-slate-700">{hero.blurb}</p>

                        <div class="mt-6 flex gap-3">
                            <input
                                type="search"
                                class="px-4 py-2 rounded-lg border w-full"
                                placeholder="Search destinations or keywords"
                                prop:value=move || ctx.query()
                                on:input=move |ev| ctx.dispatch(UiEvent::QueryChanged(event_target_value(&ev)))
                            />
                            // Results already update while typing
                            <a href="#packages" class="px-5 py-2 rounded-lg bg-emerald-600 text-white">"Search"</a>
                        </div>

                        <div class="mt-4 flex gap-3 text-sm text-slate-600">
                            {hero.badges.into_iter().map(|badge| view! {
                                <div class="px-3 py-1 bg-white rounded-full shadow">{badge}</div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
