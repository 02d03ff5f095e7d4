// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Knobs shared by the GUI and the CLI. Everything else is a constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub checklist_url: String,
    pub timeout: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            checklist_url: s!(CHECKLIST_URL),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppOptions {
    /// Defaults, with the checklist URL taken from `WSTG_CHECKLIST_URL` when set.
    pub fn from_env() -> Self {
        let url = std::env::var(CHECKLIST_URL_ENV).ok();
        Self::default().with_checklist_url(url)
    }

    /// Override the checklist source; blank values keep the current one.
    pub fn with_checklist_url(mut self, url: Option<String>) -> Self {
        if let Some(u) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.checklist_url = u;
        }
        self
    }
}
