// src/gui/components/checklist_list.rs
//
// The filtered checklist as a single-column, virtualised table.
// Click or ↑/↓ (when no text field has focus) changes the selection.

use eframe::egui::{self, Key, Label, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::LIST_ITEM_PREFIX,
    gui::{actions, app::App},
};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // (id, label) pairs; owned so the table closure doesn't borrow app.state
    let rows: Vec<(String, String)> = app.state.visible()
        .iter()
        .map(|e| (s!(e.id()), join!(LIST_ITEM_PREFIX, &e.label())))
        .collect();
    let selected_id = app.state.selected_id().map(str::to_owned);
    let current = selected_id.as_deref()
        .and_then(|id| rows.iter().position(|(rid, _)| rid == id));

    // Keyboard navigation mirrors a list widget's current-row change
    let mut picked: Option<usize> = None;
    if !rows.is_empty() && ui.ctx().memory(|m| m.focused().is_none()) {
        let (down, up) = ui.input(|i| (i.key_pressed(Key::ArrowDown), i.key_pressed(Key::ArrowUp)));
        let last = rows.len() - 1;
        if down {
            picked = Some(current.map_or(0, |i| (i + 1).min(last)));
        } else if up {
            picked = Some(current.map_or(0, |i| i.saturating_sub(1)));
        }
    }
    if picked.is_some() {
        app.scroll_to = picked;
    }

    ui.heading(format!("Tests ({})", rows.len()));
    ui.separator();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::remainder().clip(true));
    if let Some(ix) = app.scroll_to.take() {
        table = table.scroll_to_row(ix, None);
    }

    let mut clicked: Option<usize> = None;
    table.body(|body| {
        body.rows(ROW_H, rows.len(), |mut row| {
            let i = row.index();
            let Some((id, label)) = rows.get(i) else { return };
            row.set_selected(selected_id.as_deref() == Some(id.as_str()));
            row.col(|ui| {
                ui.add(Label::new(label.as_str()).selectable(false).truncate());
            });
            if row.response().clicked() {
                clicked = Some(i);
            }
        });
    });

    if let Some(i) = clicked.or(picked) {
        if let Some((id, _)) = rows.get(i) {
            actions::select(app, Some(id.clone()));
        }
    }
}
