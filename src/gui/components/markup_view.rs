// src/gui/components/markup_view.rs
//
// Draws parsed pane markup. One wrapped row per line; blank lines become half-height gaps.

use eframe::egui::{self, RichText, TextStyle};

use crate::markup::{self, Span};

pub fn draw(ui: &mut egui::Ui, spans: &[Span]) {
    let gap = ui.text_style_height(&TextStyle::Body) * 0.5;

    for line in markup::lines(spans) {
        if line.is_empty() {
            ui.add_space(gap);
            continue;
        }
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for span in line {
                match span {
                    Span::Text(t) => { ui.label(t.as_str()); }
                    Span::Bold(t) => { ui.label(RichText::new(t.as_str()).strong()); }
                    Span::Code(t) => { ui.label(RichText::new(t.as_str()).code()); }
                    Span::Link { text, href } => { ui.hyperlink_to(text.as_str(), href.as_str()); }
                    Span::Break => {}
                }
            }
        });
    }
}
