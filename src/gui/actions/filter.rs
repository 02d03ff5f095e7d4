// src/gui/actions/filter.rs
use crate::{
    config::state::{FilterState, UiEvent},
    gui::app::App,
};

pub fn apply_filter(app: &mut App, next: FilterState) {
    if app.state.handle(UiEvent::FilterChanged(next), &app.refs) {
        let shown = app.state.visible().len();
        let total = app.state.document().total_tests();
        app.status(format!("Showing {shown} of {total} tests"));
    }
}
