//! Site Footer

use leptos::prelude::*;

use crate::commands;
use crate::context::AppContext;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (brand, contact, links) =
        ctx.site(|site| (site.brand.clone(), site.contact.clone(), site.company_links.clone()));
    let copyright = format!("© {} {}. All rights reserved.", commands::current_year(), brand);
    let mailto = format!("mailto:{}", contact.email);

    view! {
        <footer class="bg-slate-900 text-slate-200 py-8">
            <div class="max-w-7xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                <div>
                    <h4 class="font-semibold text-white">{brand}</h4>
                    <p class="text-sm text-slate-400 mt-2">
                        "Curated tours & bespoke itineraries. Registered travel company."
                    </p>
                </div>
                <div>
                    <h5 class="font-semibold">"Company"</h5>
                    <ul class="mt-2 text-sm text-slate-400 space-y-2">
                        {links.into_iter().map(|link| view! { <li>{link}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h5 class="font-semibold">"Contact"</h5>
                    <p class="text-sm text-slate-400 mt-2">
                        "Email: " <a href=mailto>{contact.email}</a>
                        <br />
                        "Phone: " {contact.phone}
                    </p>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-6 mt-6 text-sm text-slate-500">{copyright}</div>
        </footer>
    }
}
