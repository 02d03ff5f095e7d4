// src/specs/reference.rs
//
// WSTG guide page → pane markup.
//
// The guide has no API; sections are only recognisable by the ids of their
// <h2> headings. One pass over the interesting tags inside #main, in document
// order. Capture switches on at the first "summary" heading and stays on, so
// everything after it (other sections included) is collected.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::{collapse_lines, escape_markup, normalize_ws};

const MAIN: &str = "#main";
const SCANNED: &str = "h1, h2, h3, h4, h5, h6, p, ul, li, pre, code, br";
const LIST_ITEM: &str = "li";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid selector `{0}`")]
    Selector(&'static str),

    #[error("Main content not found.")]
    MainNotFound,
}

/// h2 id substring → section marker. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    HowTo,
    Tools,
    Objectives,
    Remediation,
}

impl Section {
    fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.contains("summary") { Some(Section::Summary) }
        else if id.contains("how-to") { Some(Section::HowTo) }
        else if id.contains("tools") { Some(Section::Tools) }
        else if id.contains("test objectives") { Some(Section::Objectives) }
        else if id.contains("remediation") { Some(Section::Remediation) }
        else { None }
    }

    fn marker(self, title: &str) -> String {
        match self {
            Section::Summary     => format!("\n\n📌 <b>{title}</b><br>\n"),
            Section::HowTo       => format!("\n\n<br><br>🔍 <b>{title}</b><br><br>\n"),
            Section::Tools       => format!("\n\n<br><br>🛠 <b>{title}</b><br>\n"),
            Section::Objectives  => format!("\n\n<br><br>🎯 <b>{title}</b><br>\n"),
            Section::Remediation => format!("\n\n<br><br>🛡️ <b>{title}</b><br>\n"),
        }
    }
}

struct Selectors {
    main: Selector,
    scanned: Selector,
    list_item: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            main: parse(MAIN)?,
            scanned: parse(SCANNED)?,
            list_item: parse(LIST_ITEM)?,
        })
    }
}

fn parse(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::Selector(css))
}

/// Extract the guidance markup from a guide page.
///
/// `Ok("")` means the page has a main container but no summary heading.
pub fn extract(html: &str) -> Result<String, ExtractError> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(html);

    let main = doc.select(&sel.main).next().ok_or(ExtractError::MainNotFound)?;

    let mut out = s!();
    let mut capture = false;

    for el in main.select(&sel.scanned) {
        let tag = el.value().name();

        if tag == "h2" {
            let id = el.value().id().unwrap_or("");
            if let Some(section) = Section::from_id(id) {
                if section == Section::Summary { capture = true; }
                out.push_str(&section.marker(&text_of(el)));
            }
            continue;
        }

        if !capture { continue; }

        match tag {
            "p" => {
                out.push_str(&paragraph_text(el));
                out.push_str("<br>\n\n");
            }
            "ul" => {
                for li in el.select(&sel.list_item) {
                    out.push_str(&join!("- ", &text_of(li), "<br>\n"));
                }
                out.push('\n');
            }
            "pre" => {
                let code = collapse_lines(&el.text().collect::<String>());
                out.push_str(&join!("<pre><code>", &escape_markup(&code), "</code></pre>\n\n"));
            }
            "br" => out.push('\n'),
            h if is_heading(h) => {
                out.push_str(&format!("\n\n📌 <b>{}</b><br>\n", text_of(el)));
            }
            // li / code are reached through their ul / pre
            _ => {}
        }
    }

    Ok(out.trim().to_string())
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Rendered text of an element: whitespace collapsed, escaped for the markup.
fn text_of(el: ElementRef<'_>) -> String {
    escape_markup(&normalize_ws(&el.text().collect::<String>()))
}

/// Paragraph text: each text node trimmed, non-empty ones joined with a space.
fn paragraph_text(el: ElementRef<'_>) -> String {
    let text = el.text()
        .map(normalize_ws)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    escape_markup(&text)
}
