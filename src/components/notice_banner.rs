//! Notice Banner
//!
//! Transient message after an enquiry is submitted. Dismisses itself via
//! the timer started in the store, or on click.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{self, NoticeKind};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || {
        store::store_notice(&ctx.store).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "fixed top-4 inset-x-0 mx-auto z-50 max-w-md px-4 py-3 rounded-lg shadow bg-emerald-600 text-white",
                NoticeKind::Failure => "fixed top-4 inset-x-0 mx-auto z-50 max-w-md px-4 py-3 rounded-lg shadow bg-rose-600 text-white",
            };
            let id = notice.id;
            view! {
                <div class=class role="status">
                    <span>{notice.text}</span>
                    <button
                        type="button"
                        class="float-right ml-3"
                        aria-label="dismiss"
                        on:click=move |_| store::store_dismiss_notice(&ctx.store, id)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
