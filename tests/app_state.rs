// tests/app_state.rs
//
// AppState event handling with a stub reference source (no UI, no network).
//
use std::cell::RefCell;

use wstg_browser::checklist::ChecklistDocument;
use wstg_browser::config::options::AppOptions;
use wstg_browser::config::state::{AppState, FilterState, UiEvent};
use wstg_browser::filter::CategorySelector;
use wstg_browser::reference::{Guidance, ReferenceError, ReferenceSource};

/// Records requested URLs; answers from a canned map.
#[derive(Default)]
struct StubSource {
    requested: RefCell<Vec<String>>,
}

impl ReferenceSource for StubSource {
    fn fetch(&self, url: &str) -> Result<Guidance, ReferenceError> {
        self.requested.borrow_mut().push(url.to_string());
        match url {
            "" => Err(ReferenceError::EmptyUrl),
            "https://x/missing" => Err(ReferenceError::Status(404)),
            _ => Ok(Guidance::new(format!("📌 <b>Summary</b><br>\nfrom {url}"))),
        }
    }
}

const DOC: &str = r#"{"categories": {
    "Info": {"tests": [
        {"id": "WSTG-INFO-01", "name": "Search Engine", "reference": "https://x/info01",
         "objectives": ["Find leaks"]},
        {"id": "WSTG-INFO-02", "name": "Shared Name", "reference": "https://x/missing"}
    ]},
    "Auth": {"tests": [
        {"id": "WSTG-ATHN-01", "name": "Shared Name"}
    ]}
}}"#;

fn state() -> AppState {
    AppState::new(AppOptions::default(), ChecklistDocument::from_json(DOC).unwrap())
}

#[test]
fn filter_then_select_fetches_reference() {
    let mut st = state();
    let refs = StubSource::default();

    let changed = st.handle(
        UiEvent::FilterChanged(FilterState { category: CategorySelector::All, search: "info01".into() }),
        &refs,
    );
    assert!(changed);

    let labels: Vec<String> = st.visible().iter().map(|e| e.label()).collect();
    assert_eq!(labels, vec!["WSTG-INFO-01 - Search Engine"]);
    assert!(refs.requested.borrow().is_empty(), "filtering must not fetch");

    let id = st.visible()[0].id().to_string();
    assert!(st.handle(UiEvent::SelectionChanged(Some(id)), &refs));
    assert_eq!(*refs.requested.borrow(), vec!["https://x/info01"]);

    assert_eq!(st.selected_id(), Some("WSTG-INFO-01"));
    assert!(st.details_markup().contains("🆔 <b>ID: WSTG-INFO-01</b>"));
    assert!(st.details_markup().contains("- Find leaks<br>"));
    assert_eq!(st.guidance_markup(), "📌 <b>Summary</b><br>\nfrom https://x/info01");
}

#[test]
fn reselecting_does_not_refetch() {
    let mut st = state();
    let refs = StubSource::default();

    assert!(st.handle(UiEvent::SelectionChanged(Some("WSTG-INFO-01".into())), &refs));
    assert!(!st.handle(UiEvent::SelectionChanged(Some("WSTG-INFO-01".into())), &refs));
    assert_eq!(refs.requested.borrow().len(), 1);
}

#[test]
fn same_filter_is_not_a_change() {
    let mut st = state();
    let refs = StubSource::default();
    assert!(!st.handle(UiEvent::FilterChanged(FilterState::default()), &refs));
}

#[test]
fn failures_render_fixed_text() {
    let mut st = state();
    let refs = StubSource::default();

    st.handle(UiEvent::SelectionChanged(Some("WSTG-INFO-02".into())), &refs);
    assert!(matches!(st.guidance(), Some(Err(ReferenceError::Status(404)))));
    assert_eq!(st.guidance_markup(), "Failed to fetch reference.");

    // No reference URL at all
    st.handle(UiEvent::SelectionChanged(Some("WSTG-ATHN-01".into())), &refs);
    assert!(matches!(st.guidance(), Some(Err(ReferenceError::EmptyUrl))));
    assert!(st.details_markup().ends_with("🔗 <b>Reference:</b> none"));
}

#[test]
fn duplicate_names_select_by_id() {
    let mut st = state();
    let refs = StubSource::default();

    st.handle(UiEvent::SelectionChanged(Some("WSTG-ATHN-01".into())), &refs);
    let sel = st.selected().unwrap();
    assert_eq!(sel.category, "Auth");
    assert_eq!(sel.test.name, "Shared Name");
}

#[test]
fn clearing_and_unknown_ids() {
    let mut st = state();
    let refs = StubSource::default();

    st.handle(UiEvent::SelectionChanged(Some("WSTG-INFO-01".into())), &refs);
    assert!(st.handle(UiEvent::SelectionChanged(None), &refs));
    assert!(st.selected().is_none());
    assert_eq!(st.details_markup(), "");
    assert_eq!(st.guidance_markup(), "");

    st.handle(UiEvent::SelectionChanged(Some("WSTG-NOPE-01".into())), &refs);
    assert!(st.selected().is_none());
    assert_eq!(refs.requested.borrow().len(), 1);
}

#[test]
fn category_filter_keeps_selection() {
    let mut st = state();
    let refs = StubSource::default();

    st.handle(UiEvent::SelectionChanged(Some("WSTG-INFO-01".into())), &refs);
    st.handle(
        UiEvent::FilterChanged(FilterState { category: CategorySelector::Named("Auth".into()), search: String::new() }),
        &refs,
    );
    let ids: Vec<&str> = st.visible().iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["WSTG-ATHN-01"]);
    // panes are only replaced by a new selection
    assert_eq!(st.selected_id(), Some("WSTG-INFO-01"));
}
