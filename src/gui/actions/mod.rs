// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{apply_filter, select}.

mod filter; // src/gui/actions/filter.rs
mod select; // src/gui/actions/select.rs

pub use filter::apply_filter;
pub use select::select;
