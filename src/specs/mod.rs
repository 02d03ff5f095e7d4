//! # Page “specs” module
//!
//! Page-specific extraction rules for remote HTML. A spec knows *where the
//! content lives* in one kind of page and *how to turn it into pane markup*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: a spec takes the page body as `&str` and returns
//!   markup or a typed error. No network, no UI.
//! - **Selector choice**: which container and which tags are walked.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`, `reference::fetch_reference`).
//! - Rendering the markup (`markup`, `gui::components::markup_view`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → reference::fetch_reference → core::net::Http::get
//!                                       ↘ specs::reference::extract
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against captured fixtures under `tests/fixtures/`.
pub mod reference;
