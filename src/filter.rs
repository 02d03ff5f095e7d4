// src/filter.rs
//
// Read-only index over a loaded checklist.
//
// - CategorySelector: "all categories" sentinel or one exact category name.
// - ChecklistEntry:   borrowed (category, test) pair; the list row.
// - filter():         category + case-insensitive substring on id/name,
//                     source order preserved, no sorting.

use crate::checklist::{ChecklistDocument, TestCase};
use crate::config::consts::{ALL_CATEGORIES_LABEL, LABEL_SEP};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Named(String),
}

impl CategorySelector {
    #[inline]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Named(n) => n == category,
        }
    }

    /// Picker text.
    pub fn label(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES_LABEL,
            CategorySelector::Named(n) => n,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistEntry<'a> {
    pub category: &'a str,
    pub test: &'a TestCase,
}

impl<'a> ChecklistEntry<'a> {
    /// Composite label: "<id> - <name>".
    pub fn label(&self) -> String {
        join!(&self.test.id, LABEL_SEP, &self.test.name)
    }

    #[inline]
    pub fn id(&self) -> &'a str { &self.test.id }
}

/// Entries matching `category` and `search`, categories and tests in source order.
/// `search` is trimmed; empty matches everything.
pub fn filter<'a>(
    doc: &'a ChecklistDocument,
    category: &CategorySelector,
    search: &str,
) -> Vec<ChecklistEntry<'a>> {
    let needle = search.trim().to_lowercase();

    doc.categories()
        .filter(|(name, _)| category.matches(name))
        .flat_map(|(name, entry)| {
            entry.tests.iter().map(move |test| ChecklistEntry { category: name, test })
        })
        .filter(|e| matches_search(e.test, &needle))
        .collect()
}

/// `needle` must already be lowercased. Ids also match with their dashes dropped
/// ("info01" finds "WSTG-INFO-01").
fn matches_search(test: &TestCase, needle: &str) -> bool {
    if needle.is_empty() || test.name.to_lowercase().contains(needle) {
        return true;
    }
    let id = test.id.to_lowercase();
    id.contains(needle) || id.replace('-', "").contains(needle)
}

/// Exact lookup on the stable test id; first hit in source order.
pub fn find_by_id<'a>(doc: &'a ChecklistDocument, id: &str) -> Option<ChecklistEntry<'a>> {
    doc.categories().find_map(|(name, entry)| {
        entry.tests.iter()
            .find(|t| t.id == id)
            .map(|test| ChecklistEntry { category: name, test })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ChecklistDocument {
        ChecklistDocument::from_json(r#"{"categories": {
            "Info": {"tests": [
                {"id": "WSTG-INFO-01", "name": "Search Engine", "reference": "https://x/info01"},
                {"id": "WSTG-INFO-02", "name": "Fingerprint Web Server"}
            ]},
            "Config": {"tests": [
                {"id": "WSTG-CONF-01", "name": "Network Infrastructure"}
            ]}
        }}"#).unwrap()
    }

    #[test]
    fn label_is_id_dash_name() {
        let d = doc();
        let e = find_by_id(&d, "WSTG-INFO-01").unwrap();
        assert_eq!(e.label(), "WSTG-INFO-01 - Search Engine");
        assert_eq!(e.category, "Info");
    }

    #[test]
    fn named_category_only() {
        let d = doc();
        let rows = filter(&d, &CategorySelector::Named(s!("Config")), "");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id(), "WSTG-CONF-01");
    }

    #[test]
    fn unknown_category_is_empty() {
        let d = doc();
        assert!(filter(&d, &CategorySelector::Named(s!("Nope")), "").is_empty());
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let d = doc();
        let rows = filter(&d, &CategorySelector::All, "  SERVER ");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id(), "WSTG-INFO-02");
    }

    #[test]
    fn id_matches_without_dashes() {
        let d = doc();
        let ids: Vec<&str> = filter(&d, &CategorySelector::All, "info01").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["WSTG-INFO-01"]);
        assert_eq!(filter(&d, &CategorySelector::All, "wstginfo").len(), 2);
        // names keep their spaces
        assert!(filter(&d, &CategorySelector::All, "searchengine").is_empty());
    }

    #[test]
    fn missing_id_is_none() {
        assert!(find_by_id(&doc(), "WSTG-NOPE-99").is_none());
    }
}
