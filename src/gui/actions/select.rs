// src/gui/actions/select.rs
use crate::{
    config::state::UiEvent,
    gui::app::App,
};

/// Select a test by id. Blocks the UI thread while the reference page downloads.
pub fn select(app: &mut App, id: Option<String>) {
    if !app.state.handle(UiEvent::SelectionChanged(id), &app.refs) {
        return;
    }
    app.refresh_panes();

    let msg = match (app.state.selected(), app.state.guidance()) {
        (Some(e), Some(Err(err))) => format!("{}: {}", e.id(), err),
        (Some(e), Some(Ok(g))) if g.is_empty() => format!("{}: no guidance found on reference page", e.id()),
        (Some(e), _) => format!("{}: {}", e.id(), e.test.name),
        (None, _) => s!("Idle"),
    };
    app.status(msg);
}
