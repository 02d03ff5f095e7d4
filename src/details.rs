// src/details.rs
//
// Details pane for the selected test: category, id, objectives, reference link.
// Output uses the same markup subset as the guidance pane.

use crate::core::sanitize::escape_markup;
use crate::filter::ChecklistEntry;

pub fn details_markup(entry: &ChecklistEntry<'_>) -> String {
    let test = entry.test;
    let mut out = s!();

    out.push_str(&format!("📌 <b>Category: {}</b><br><br>", escape_markup(entry.category)));
    out.push_str(&format!("🆔 <b>ID: {}</b><br><br>", escape_markup(&test.id)));

    if let Some(objectives) = &test.objectives {
        out.push_str("🎯 <b>Test Objectives:</b><br>");
        for obj in objectives {
            out.push_str(&join!("- ", &escape_markup(obj), "<br>"));
        }
        out.push_str("<br>");
    }

    out.push_str("🔗 <b>Reference:</b> ");
    let url = test.reference_url();
    if url.is_empty() {
        out.push_str("none");
    } else {
        let url = escape_markup(url);
        out.push_str(&format!(r#"<a href="{url}">{url}</a>"#));
    }
    out
}
