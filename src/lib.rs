// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod checklist;
pub mod details;
pub mod filter;
pub mod loader;
pub mod markup;
pub mod reference;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
