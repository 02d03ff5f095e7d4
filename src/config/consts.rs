// src/config/consts.rs

// Net config
pub const CHECKLIST_URL: &str =
    "https://raw.githubusercontent.com/OWASP/wstg/master/checklists/checklist.json";
pub const CHECKLIST_URL_ENV: &str = "WSTG_CHECKLIST_URL";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("wstg_browser/", env!("CARGO_PKG_VERSION"));

// Reference pane fallbacks
pub const FAILED_TO_FETCH: &str = "Failed to fetch reference.";
pub const MAIN_NOT_FOUND: &str = "Main content not found.";
pub const FETCH_ERROR_PREFIX: &str = "Error fetching reference: ";

// Window
pub const WINDOW_TITLE: &str = "🔍 OWASP WSTG Checklist Browser";
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 800.0;

// Widgets
pub const SEARCH_HINT: &str = "🔍 Search checklists...";
pub const ALL_CATEGORIES_LABEL: &str = "📂 All Categories";
pub const LIST_ITEM_PREFIX: &str = "✅ ";
pub const LABEL_SEP: &str = " - ";
