// src/gui/components/panes.rs
//
// Right-hand side: details pane (top, resizable) over the guidance pane.
// Both are read-only and replaced wholesale on every selection.

use eframe::egui;

use crate::gui::app::App;

use super::markup_view;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::TopBottomPanel::top("details_pane")
        .resizable(true)
        .default_height(220.0)
        .show_inside(ui, |ui| {
            ui.heading("Details");
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("details_scroll")
                .auto_shrink(false)
                .show(ui, |ui| {
                    if app.details.is_empty() {
                        ui.weak("Select a test to see its details.");
                    } else {
                        markup_view::draw(ui, &app.details);
                    }
                });
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.heading("Reference");
        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("guidance_scroll")
            .auto_shrink(false)
            .show(ui, |ui| {
                markup_view::draw(ui, &app.guidance);
            });
    });
}
