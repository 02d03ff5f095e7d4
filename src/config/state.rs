// src/config/state.rs
//
// Application state as one explicit struct. UI events come in through `handle`;
// everything the panes show is derived from here, so it is testable without egui.

use crate::{
    checklist::ChecklistDocument,
    details::details_markup,
    filter::{self, CategorySelector, ChecklistEntry},
    reference::{self, Guidance, ReferenceError, ReferenceSource},
};

use super::options::AppOptions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategorySelector,
    pub search: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    FilterChanged(FilterState),
    /// Test id, or `None` to clear.
    SelectionChanged(Option<String>),
}

pub struct AppState {
    pub options: AppOptions,
    document: ChecklistDocument,
    filter: FilterState,
    selection: Option<String>,
    guidance: Option<Result<Guidance, ReferenceError>>,
}

impl AppState {
    pub fn new(options: AppOptions, document: ChecklistDocument) -> Self {
        Self {
            options,
            document,
            filter: FilterState::default(),
            selection: None,
            guidance: None,
        }
    }

    #[inline]
    pub fn document(&self) -> &ChecklistDocument { &self.document }

    #[inline]
    pub fn filter(&self) -> &FilterState { &self.filter }

    #[inline]
    pub fn selected_id(&self) -> Option<&str> { self.selection.as_deref() }

    #[inline]
    pub fn guidance(&self) -> Option<&Result<Guidance, ReferenceError>> { self.guidance.as_ref() }

    /// Rows for the list under the current filter.
    pub fn visible(&self) -> Vec<ChecklistEntry<'_>> {
        filter::filter(&self.document, &self.filter.category, &self.filter.search)
    }

    pub fn selected(&self) -> Option<ChecklistEntry<'_>> {
        self.selection.as_deref().and_then(|id| filter::find_by_id(&self.document, id))
    }

    /// Details pane markup; empty with no selection.
    pub fn details_markup(&self) -> String {
        self.selected().map(|e| details_markup(&e)).unwrap_or_default()
    }

    /// Guidance pane markup; empty until something was fetched.
    pub fn guidance_markup(&self) -> String {
        self.guidance.as_ref().map(reference::render).unwrap_or_default()
    }

    /// Apply one UI event. Returns true if anything the panes show changed.
    ///
    /// Selecting a test fetches its reference synchronously through `refs`.
    /// Re-selecting the current test is a no-op.
    pub fn handle(&mut self, event: UiEvent, refs: &dyn ReferenceSource) -> bool {
        match event {
            UiEvent::FilterChanged(f) => {
                if f == self.filter { return false; }
                logd!("Filter: category={:?} search={:?}", f.category, f.search);
                self.filter = f;
                true
            }
            UiEvent::SelectionChanged(None) => {
                let changed = self.selection.is_some();
                self.selection = None;
                self.guidance = None;
                changed
            }
            UiEvent::SelectionChanged(Some(id)) => {
                if self.selection.as_deref() == Some(id.as_str()) { return false; }

                let url = match filter::find_by_id(&self.document, &id) {
                    Some(entry) => s!(entry.test.reference_url()),
                    None => {
                        logw!("Select: unknown test id {}", id);
                        self.selection = None;
                        self.guidance = None;
                        return true;
                    }
                };

                logf!("Select: {} → {}", id, if url.is_empty() { "(no reference)" } else { url.as_str() });
                self.selection = Some(id);
                self.guidance = Some(refs.fetch(&url));
                true
            }
        }
    }
}
