//! Page State
//!
//! The whole interactive state of the page and a pure reducer over it.
//! Side effects (scrolling, handing off an enquiry) are returned as
//! [`UiEffect`]s for the rendering layer to run.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::enquiry::EnquiryForm;
use crate::error::{DomainError, DomainResult};
use crate::models::{PackageId, PackageRecord};

/// Which package, if any, is open in the detail modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Closed,
    Viewing(PackageId),
}

impl Selection {
    /// Show `id`, replacing whatever was shown before.
    pub fn select(&mut self, id: PackageId) {
        *self = Selection::Viewing(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::Closed;
    }

    pub fn package_id(&self) -> Option<PackageId> {
        match self {
            Selection::Closed => None,
            Selection::Viewing(id) => Some(*id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Viewing(_))
    }
}

/// Page-local UI state; lives as long as the page does
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub query: String,
    pub selection: Selection,
    pub form: EnquiryForm,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the selection against the catalog.
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a PackageRecord> {
        self.selection.package_id().and_then(|id| catalog.get(id))
    }

    /// Packages matching the current query, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PackageRecord> {
        catalog.search(&self.query)
    }
}

/// User interactions the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    QueryChanged(String),
    ViewDetails(PackageId),
    CloseDetails,
    /// Raw form input; `field` is the input's `name` attribute.
    FieldChanged { field: String, value: String },
    SubmitEnquiry,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Smoothly scroll the viewport to the top of the page.
    ScrollToTop,
    /// Hand the submitted enquiry to the transport.
    DeliverEnquiry(EnquiryForm),
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<UiEffect>,
}

impl Transition {
    fn quiet(state: UiState) -> Self {
        Self { state, effects: Vec::new() }
    }
}

/// Apply `event` to `state`.
///
/// On error the previous state stays authoritative; nothing is partially
/// applied.
pub fn reduce(state: &UiState, catalog: &Catalog, event: UiEvent) -> DomainResult<Transition> {
    let mut next = state.clone();
    match event {
        UiEvent::QueryChanged(query) => {
            next.query = query;
            Ok(Transition::quiet(next))
        }
        UiEvent::ViewDetails(id) => {
            if !catalog.contains(id) {
                return Err(DomainError::UnknownPackage(id));
            }
            next.selection.select(id);
            Ok(Transition {
                state: next,
                effects: vec![UiEffect::ScrollToTop],
            })
        }
        UiEvent::CloseDetails => {
            next.selection.clear();
            Ok(Transition::quiet(next))
        }
        UiEvent::FieldChanged { field, value } => {
            next.form.update(&field, value)?;
            Ok(Transition::quiet(next))
        }
        UiEvent::SubmitEnquiry => {
            next.form.validate()?;
            let snapshot = std::mem::take(&mut next.form);
            Ok(Transition {
                state: next,
                effects: vec![UiEffect::DeliverEnquiry(snapshot)],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::EnquiryField;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    fn apply(state: &UiState, event: UiEvent) -> Transition {
        reduce(state, &catalog(), event).unwrap()
    }

    fn field(name: &str, value: &str) -> UiEvent {
        UiEvent::FieldChanged {
            field: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = UiState::new();
        assert!(state.query.is_empty());
        assert_eq!(state.selection, Selection::Closed);
        assert!(state.form.is_blank());
    }

    #[test]
    fn test_query_drives_visible_packages() {
        let catalog = catalog();
        let state = apply(&UiState::new(), UiEvent::QueryChanged("paris".into())).state;
        let ids: Vec<u32> = state.visible(&catalog).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);

        let state = apply(&state, UiEvent::QueryChanged(String::new())).state;
        assert_eq!(state.visible(&catalog).len(), 3);
    }

    #[test]
    fn test_select_then_clear_closes() {
        let opened = apply(&UiState::new(), UiEvent::ViewDetails(PackageId(1)));
        assert_eq!(opened.state.selection, Selection::Viewing(PackageId(1)));
        assert_eq!(opened.effects, vec![UiEffect::ScrollToTop]);

        let closed = apply(&opened.state, UiEvent::CloseDetails);
        assert_eq!(closed.state.selection, Selection::Closed);
        assert!(closed.effects.is_empty());
    }

    #[test]
    fn test_second_select_replaces_first() {
        let first = apply(&UiState::new(), UiEvent::ViewDetails(PackageId(1))).state;
        let second = apply(&first, UiEvent::ViewDetails(PackageId(3))).state;
        assert_eq!(second.selection, Selection::Viewing(PackageId(3)));
        assert_eq!(second.selected(&catalog()).map(|p| p.id), Some(PackageId(3)));
    }

    #[test]
    fn test_reselect_keeps_state_and_scrolls() {
        let first = apply(&UiState::new(), UiEvent::ViewDetails(PackageId(2)));
        let again = apply(&first.state, UiEvent::ViewDetails(PackageId(2)));
        assert_eq!(again.state, first.state);
        assert_eq!(again.effects, vec![UiEffect::ScrollToTop]);
    }

    #[test]
    fn test_clear_twice_is_clear_once() {
        let open = apply(&UiState::new(), UiEvent::ViewDetails(PackageId(1))).state;
        let once = apply(&open, UiEvent::CloseDetails).state;
        let twice = apply(&once, UiEvent::CloseDetails).state;
        assert_eq!(once, twice);
        assert_eq!(twice.selection, Selection::Closed);
    }

    #[test]
    fn test_unknown_package_rejected() {
        let result = reduce(&UiState::new(), &catalog(), UiEvent::ViewDetails(PackageId(42)));
        assert!(matches!(result, Err(DomainError::UnknownPackage(PackageId(42)))));
    }

    #[test]
    fn test_selection_survives_filtering() {
        let open = apply(&UiState::new(), UiEvent::ViewDetails(PackageId(3))).state;
        let filtered = apply(&open, UiEvent::QueryChanged("paris".into())).state;
        assert_eq!(filtered.selection, Selection::Viewing(PackageId(3)));
        assert!(filtered.selected(&catalog()).is_some());
    }

    #[test]
    fn test_submit_delivers_snapshot_and_resets() {
        let mut state = UiState::new();
        state = apply(&state, field("name", "Asha")).state;
        state = apply(&state, field("email", "a@b.com")).state;
        let submitted = apply(&state, UiEvent::SubmitEnquiry);

        assert_eq!(submitted.state.form, EnquiryForm::default());
        assert_eq!(
            submitted.effects,
            vec![UiEffect::DeliverEnquiry(EnquiryForm {
                name: "Asha".into(),
                email: "a@b.com".into(),
                phone: String::new(),
                message: String::new(),
            })]
        );
    }

    #[test]
    fn test_submit_with_missing_email_rejected() {
        let state = apply(&UiState::new(), field("name", "Asha")).state;
        let result = reduce(&state, &catalog(), UiEvent::SubmitEnquiry);
        assert!(matches!(result, Err(DomainError::ValidationFailed(EnquiryField::Email))));
        assert_eq!(state.form.name, "Asha");
    }

    #[test]
    fn test_submit_with_spaces_for_name_is_delivered() {
        let mut state = apply(&UiState::new(), field("name", "   ")).state;
        state = apply(&state, field("email", "a@b.com")).state;
        let submitted = apply(&state, UiEvent::SubmitEnquiry);
        assert!(submitted.state.form.is_blank());
        assert!(matches!(
            submitted.effects.as_slice(),
            [UiEffect::DeliverEnquiry(form)] if form.name == "   "
        ));
    }

    #[test]
    fn test_invalid_field_leaves_state_alone() {
        let state = apply(&UiState::new(), field("phone", "+91 1")).state;
        let result = reduce(&state, &catalog(), field("fax", "123"));
        assert!(matches!(result, Err(DomainError::InvalidField(_))));
        assert_eq!(state.form.phone, "+91 1");
    }

    #[test]
    fn test_form_edits_do_not_touch_selection_or_query() {
        let mut state = apply(&UiState::new(), UiEvent::QueryChanged("swiss".into())).state;
        state = apply(&state, UiEvent::ViewDetails(PackageId(1))).state;
        state = apply(&state, field("message", "Honeymoon")).state;
        assert_eq!(state.query, "swiss");
        assert_eq!(state.selection, Selection::Viewing(PackageId(1)));
        assert_eq!(state.form.message, "Honeymoon");
    }
}
