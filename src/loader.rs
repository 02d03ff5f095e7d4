// src/loader.rs
//
// Checklist download. Non-200 degrades to an empty document; transport and
// JSON failures come back as typed errors so each front end picks its policy
// (GUI: show empty list + status, CLI: exit non-zero).

use crate::checklist::ChecklistDocument;
use crate::core::{Http, NetError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("checklist download failed: {0}")]
    Net(#[from] NetError),

    #[error("checklist is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn fetch_checklist(http: &Http, url: &str) -> Result<ChecklistDocument, LoadError> {
    let resp = http.get(url)?;
    if !resp.is_ok() {
        logw!("Checklist: HTTP {} from {}, using empty checklist", resp.status, url);
        return Ok(ChecklistDocument::default());
    }

    let doc = ChecklistDocument::from_json(&resp.body)?;
    logf!(
        "Checklist: Loaded {} tests in {} categories",
        doc.total_tests(),
        doc.category_count()
    );
    Ok(doc)
}

/// Never fails: any error becomes an empty document plus the error for display.
pub fn load_or_empty(http: &Http, url: &str) -> (ChecklistDocument, Option<LoadError>) {
    match fetch_checklist(http, url) {
        Ok(doc) => (doc, None),
        Err(e) => {
            loge!("Checklist: {}", e);
            (ChecklistDocument::default(), Some(e))
        }
    }
}
