//! Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the search
//! query, the selection and the enquiry form are separate fields, so typing
//! in the form does not re-run the package grid or the modal.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;
use triovoyage_core::{EnquiryField, EnquiryForm, PackageId, Selection, UiState};

/// Tone of a notice banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Short message shown above the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number; a timer only dismisses the notice it was started for
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Current search text
    pub query: String,
    /// Package open in the modal
    pub selection: Selection,
    /// Enquiry form contents
    pub form: EnquiryForm,
    /// Banner currently shown, if any
    pub notice: Option<Notice>,
    /// Last issued notice id
    pub notice_seq: u32,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the reducer state, without tracking
pub fn store_ui(store: &PageStore) -> UiState {
    UiState {
        query: store.query().get_untracked(),
        selection: store.selection().get_untracked(),
        form: store.form().get_untracked(),
    }
}

/// Write back a reducer state; only changed fields notify their readers.
pub fn store_set_ui(store: &PageStore, ui: UiState) {
    let UiState { query, selection, form } = ui;
    if store.query().with_untracked(|current| *current != query) {
        store.query().set(query);
    }
    if store.selection().get_untracked() != selection {
        store.selection().set(selection);
    }
    if store.form().with_untracked(|current| *current != form) {
        store.form().set(form);
    }
}

pub fn store_query(store: &PageStore) -> String {
    store.query().get()
}

pub fn store_selection(store: &PageStore) -> Option<PackageId> {
    store.selection().get().package_id()
}

pub fn store_form_value(store: &PageStore, field: EnquiryField) -> String {
    store.form().with(|form| form.get(field).to_string())
}

pub fn store_notice(store: &PageStore) -> Option<Notice> {
    store.notice().get()
}

/// Replace the shown notice, returning its id.
pub fn store_push_notice(store: &PageStore, kind: NoticeKind, text: String) -> u32 {
    let id = store.notice_seq().get_untracked().wrapping_add(1);
    store.notice_seq().set(id);
    store.notice().set(Some(Notice { id, kind, text }));
    id
}

/// Show a notice and schedule its dismissal.
pub fn store_show_notice(store: &PageStore, kind: NoticeKind, text: String, timeout_ms: u32) {
    let id = store_push_notice(store, kind, text);
    let store = *store;
    let _ = Timeout::new(timeout_ms, move || store_dismiss_notice(&store, id)).forget();
}

/// Remove the notice with `id` if it is still the one shown.
pub fn store_dismiss_notice(store: &PageStore, id: u32) {
    let current = store.notice().with_untracked(|notice| notice.as_ref().map(|n| n.id));
    if current == Some(id) {
        store.notice().set(None);
    }
}
