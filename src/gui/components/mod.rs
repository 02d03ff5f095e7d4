// src/gui/components/mod.rs
pub mod checklist_list;
pub mod filter_bar;
pub mod markup_view;
pub mod panes;
