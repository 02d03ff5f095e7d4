// src/gui/components/filter_bar.rs
//
// Search box + category picker. Edits a copy of the filter and hands it to
// actions::apply_filter only when something actually changed.

use eframe::egui;

use crate::{
    config::consts::{ALL_CATEGORIES_LABEL, SEARCH_HINT},
    filter::CategorySelector,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut next = app.state.filter().clone();
    let names: Vec<String> = app.state.document()
        .category_names()
        .into_iter()
        .map(String::from)
        .collect();

    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut next.search)
            .hint_text(SEARCH_HINT)
            .desired_width(f32::INFINITY),
    );

    egui::ComboBox::from_id_salt("category_picker")
        .selected_text(next.category.label().to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut next.category, CategorySelector::All, ALL_CATEGORIES_LABEL);
            for name in &names {
                ui.selectable_value(&mut next.category, CategorySelector::Named(name.clone()), name.as_str());
            }
        });
    ui.add_space(4.0);

    if &next != app.state.filter() {
        logd!("UI: Filter → {:?}", next);
        actions::apply_filter(app, next);
    }
}
