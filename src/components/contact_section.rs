//! Contact Section
//!
//! Enquiry form plus the travel info panel. Required-field prompts come
//! from the browser; the reducer re-checks on submit.

use leptos::prelude::*;
use triovoyage_core::{EnquiryField, UiEvent};
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Build a `tel:` link from a display phone number.
pub fn tel_href(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

/// Read `(name, value)` from the input or textarea that fired `ev`.
fn field_input(ev: &web_sys::Event) -> Option<(String, String)> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| (area.name(), area.value()))
}

fn on_field_input(ctx: AppContext, ev: &web_sys::Event) {
    if let Some((field, value)) = field_input(ev) {
        ctx.dispatch(UiEvent::FieldChanged { field, value });
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let phone = ctx.site(|site| site.contact.phone.clone());
    let call_href = tel_href(&phone);
    let travel_info = ctx.site(|site| site.travel_info.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(UiEvent::SubmitEnquiry);
    };

    view! {
        <section id="contact" class="max-w-7xl mx-auto px-6 py-12">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-start">
                <div>
                    <h3 class="text-2xl font-bold">"Get a tailored quote"</h3>
                    <p class="mt-2 text-slate-600">
                        "Tell us your travel dates and preferences. We'll design a plan and price it for you."
                    </p>

                    <form class="mt-6 space-y-4" on:submit=on_submit>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <input
                                name="name"
                                placeholder="Full name"
                                class="px-4 py-2 rounded-lg border w-full"
                                required=true
                                prop:value=move || ctx.form_value(EnquiryField::Name)
                                on:input=move |ev| on_field_input(ctx, &ev)
                            />
                            <input
                                name="email"
                                type="email"
                                placeholder="Email"
                                class="px-4 py-2 rounded-lg border w-full"
                                required=true
                                prop:value=move || ctx.form_value(EnquiryField::Email)
                                on:input=move |ev| on_field_input(ctx, &ev)
                            />
                        </div>
                        <input
                            name="phone"
                            placeholder="Phone / WhatsApp"
                            class="px-4 py-2 rounded-lg border w-full"
                            prop:value=move || ctx.form_value(EnquiryField::Phone)
                            on:input=move |ev| on_field_input(ctx, &ev)
                        />
                        <textarea
                            name="message"
                            rows="4"
                            placeholder="Tell us what you'd like (destinations, dates, group size)"
                            class="px-4 py-2 rounded-lg border w-full"
                            prop:value=move || ctx.form_value(EnquiryField::Message)
                            on:input=move |ev| on_field_input(ctx, &ev)
                        ></textarea>
                        <div class="flex items-center gap-4">
                            <button type="submit" class="px-5 py-2 rounded-lg bg-emerald-600 text-white">
                                "Send Enquiry"
                            </button>
                            <a href=call_href class="px-4 py-2 rounded-lg border">"Call " {phone}</a>
                        </div>
                    </form>
                </div>

                <div class="bg-gradient-to-tr from-sky-50 to-white rounded-2xl p-6 shadow">
                    <h4 class="font-semibold">"Travel Info"</h4>
                    <dl class="mt-4 grid grid-cols-2 gap-4 text-sm text-slate-600">
                        {travel_info.into_iter().map(|entry| view! {
                            <div>
                                <dt class="font-medium">{entry.label}</dt>
                                <dd>{entry.value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>

                    <div class="mt-6">
                        <h5 class="font-semibold">"Need inspiration?"</h5>
                        <p class="text-sm text-slate-600 mt-2">"Check our sample itineraries and seasonal offers."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
