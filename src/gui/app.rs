// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{options::AppOptions, state::AppState},
    core::{Http, NetError},
    loader,
    markup::{self, Span},
    reference::WebReferences,
};

use super::components::{checklist_list, filter_bar, panes};

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    let app = App::new(app_options)?;
    eframe::run_native(
        crate::config::consts::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub refs: WebReferences,

    // parsed pane contents, rebuilt only when the selection changes
    pub details: Vec<Span>,
    pub guidance: Vec<Span>,

    pub status: String,

    // list row to bring into view on the next frame (keyboard navigation)
    pub scroll_to: Option<usize>,
}

impl App {
    /// Blocks on the checklist download; a failed load leaves an empty list.
    pub fn new(options: AppOptions) -> Result<Self, NetError> {
        let http = Http::new(options.timeout)?;

        logf!("Init: loading checklist from {}", options.checklist_url);
        let (document, err) = loader::load_or_empty(&http, &options.checklist_url);

        let status = match err {
            Some(e) => format!("Error: {e}"),
            None if document.is_empty() => s!("Checklist is empty"),
            None => format!(
                "Loaded {} tests in {} categories",
                document.total_tests(),
                document.category_count()
            ),
        };

        Ok(Self {
            state: AppState::new(options, document),
            refs: WebReferences::new(http),
            details: Vec::new(),
            guidance: Vec::new(),
            status,
            scroll_to: None,
        })
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-derive both panes from state.
    pub fn refresh_panes(&mut self) {
        self.details = markup::parse(&self.state.details_markup());
        self.guidance = markup::parse(&self.state.guidance_markup());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("filters").show(ctx, |ui| {
            filter_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::SidePanel::left("checklist")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                checklist_list::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            panes::draw(ui, self);
        });
    }
}
