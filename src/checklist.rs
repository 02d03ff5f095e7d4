// src/checklist.rs
//
// Checklist data model. Shape of the upstream JSON:
//   {"categories": {<name>: {"tests": [{"id","name","reference","objectives"?}, ...]}, ...}}
//
// Category order is the order of the JSON source; lookups go through `id`.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Root document. Loaded once, never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChecklistDocument {
    #[serde(default, deserialize_with = "categories_in_order")]
    categories: Vec<(String, CategoryEntry)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub objectives: Option<Vec<String>>,
}

impl TestCase {
    /// Reference URL, or "" when absent.
    pub fn reference_url(&self) -> &str {
        self.reference.as_deref().unwrap_or("")
    }
}

impl ChecklistDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_categories(categories: Vec<(String, CategoryEntry)>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// Categories in source order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryEntry)> {
        self.categories.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn category(&self, name: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Category names sorted for the picker.
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn category_count(&self) -> usize { self.categories.len() }

    pub fn total_tests(&self) -> usize {
        self.categories.iter().map(|(_, c)| c.tests.len()).sum()
    }
}

/// Keep the JSON object order and reject duplicate category names.
fn categories_in_order<'de, D>(d: D) -> Result<Vec<(String, CategoryEntry)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCategories;

    impl<'de> Visitor<'de> for OrderedCategories {
        type Value = Vec<(String, CategoryEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category name to category entry")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out: Vec<(String, CategoryEntry)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, entry)) = map.next_entry::<String, CategoryEntry>()? {
                if out.iter().any(|(n, _)| *n == name) {
                    return Err(de::Error::custom(format!("duplicate category `{name}`")));
                }
                out.push((name, entry));
            }
            Ok(out)
        }
    }

    d.deserialize_map(OrderedCategories)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "categories": {
            "Zeta": {"id": "WSTG-ZETA", "tests": [
                {"id": "WSTG-ZETA-01", "name": "Last", "reference": "https://x/z1", "objectives": ["a", "b"]}
            ]},
            "Alpha": {"tests": [
                {"id": "WSTG-ALPH-01", "name": "First"},
                {"id": "WSTG-ALPH-02", "name": "Second", "reference": null}
            ]}
        }
    }"#;

    #[test]
    fn keeps_source_order() {
        let doc = ChecklistDocument::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = doc.categories().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(doc.category_names(), vec!["Alpha", "Zeta"]);
        assert_eq!(doc.total_tests(), 3);
    }

    #[test]
    fn optional_fields() {
        let doc = ChecklistDocument::from_json(SAMPLE).unwrap();
        let alpha = doc.category("Alpha").unwrap();
        assert_eq!(alpha.tests[0].reference_url(), "");
        assert!(alpha.tests[0].objectives.is_none());
        assert_eq!(alpha.tests[1].reference_url(), "");

        let zeta = doc.category("Zeta").unwrap();
        assert_eq!(zeta.tests[0].reference_url(), "https://x/z1");
        assert_eq!(zeta.tests[0].objectives.as_deref(), Some(&[s!("a"), s!("b")][..]));
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let dup = r#"{"categories": {"A": {"tests": []}, "A": {"tests": []}}}"#;
        let err = ChecklistDocument::from_json(dup).unwrap_err();
        assert!(err.to_string().contains("duplicate category `A`"));
    }

    #[test]
    fn missing_categories_is_empty() {
        let doc = ChecklistDocument::from_json("{}").unwrap();
        assert!(doc.is_empty());
    }
}
