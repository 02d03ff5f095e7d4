// src/reference.rs
//
// Reference fetch facade: URL → Guidance, with typed failures.
// `render` / `fetch_reference_details` turn results into the fixed pane strings.

use crate::config::consts::{FAILED_TO_FETCH, FETCH_ERROR_PREFIX, MAIN_NOT_FOUND, REQUEST_TIMEOUT_SECS};
use crate::core::{Http, NetError};
use crate::specs::reference::{self as page, ExtractError};

/// Extracted guidance markup for one reference page. Built per request, never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Guidance {
    markup: String,
}

impl Guidance {
    pub fn new(markup: String) -> Self { Self { markup } }
    pub fn as_str(&self) -> &str { &self.markup }
    pub fn is_empty(&self) -> bool { self.markup.is_empty() }
}

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("test has no reference URL")]
    EmptyUrl,

    #[error("reference returned HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Net(#[from] NetError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl ReferenceError {
    /// Text shown in the guidance pane for this failure.
    pub fn display_text(&self) -> String {
        match self {
            ReferenceError::EmptyUrl | ReferenceError::Status(_) => s!(FAILED_TO_FETCH),
            ReferenceError::Extract(ExtractError::MainNotFound) => s!(MAIN_NOT_FOUND),
            ReferenceError::Net(e) => join!(FETCH_ERROR_PREFIX, &e.to_string()),
            ReferenceError::Extract(e) => join!(FETCH_ERROR_PREFIX, &e.to_string()),
        }
    }
}

/// Where guidance comes from. The GUI state talks to this, tests stub it.
pub trait ReferenceSource {
    fn fetch(&self, url: &str) -> Result<Guidance, ReferenceError>;
}

/// Live source: GET the page and run the extractor.
pub struct WebReferences {
    http: Http,
}

impl WebReferences {
    pub fn new(http: Http) -> Self { Self { http } }
}

impl ReferenceSource for WebReferences {
    fn fetch(&self, url: &str) -> Result<Guidance, ReferenceError> {
        fetch_reference(&self.http, url)
    }
}

pub fn fetch_reference(http: &Http, url: &str) -> Result<Guidance, ReferenceError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ReferenceError::EmptyUrl);
    }

    let resp = http.get(url)?;
    if !resp.is_ok() {
        logw!("Reference: HTTP {} from {}", resp.status, url);
        return Err(ReferenceError::Status(resp.status));
    }

    let markup = page::extract(&resp.body)?;
    logd!("Reference: {} → {} bytes of markup", url, markup.len());
    Ok(Guidance::new(markup))
}

/// Pane text for a fetch result.
pub fn render(result: &Result<Guidance, ReferenceError>) -> String {
    match result {
        Ok(g) => s!(g.as_str()),
        Err(e) => e.display_text(),
    }
}

/// One-shot convenience: fetch with a fresh client and always return pane text.
pub fn fetch_reference_details(url: &str) -> String {
    let http = match Http::new(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS)) {
        Ok(h) => h,
        Err(e) => return join!(FETCH_ERROR_PREFIX, &e.to_string()),
    };
    let result = fetch_reference(&http, url);
    if let Err(e) = &result {
        logd!("Reference: {} failed: {}", url, e);
    }
    render(&result)
}
