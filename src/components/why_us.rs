//! Why Us Panel

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn WhyUs() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let copy = ctx.site(|site| site.why_us.clone());

    view! {
        <section id="why" class="bg-white py-12">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-8 items-center">
                <div>
                    <h3 class="text-2xl font-bold">{copy.heading}</h3>
                    <p class="mt-3 text-slate-600">{copy.blurb}</p>
                    <ul class="mt-4 space-y-3 text-sm text-slate-600">
                        {copy.points.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="md:col-span-2 grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {copy.features.into_iter().map(|feature| view! {
                        <div class="rounded-2xl overflow-hidden shadow">
                            <img src=feature.image_url alt=feature.alt class="w-full h-56 object-cover" />
                            <div class="p-4">
                                <h5 class="font-semibold">{feature.title}</h5>
                                <p class="text-sm text-slate-600">{feature.blurb}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
