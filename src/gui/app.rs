// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::GlazeCatalog,
    error::Result,
    scrape::RunSummary,
    store::Store,
};

use super::{actions, components, thumbs::ThumbCache};

pub fn run(options: eframe::NativeOptions, state: AppState) -> std::result::Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Glaze Layering Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical data for display, rebuilt on load/scrape
    pub catalog: GlazeCatalog,

    pub thumbs: ThumbCache,

    // status/progress (scrape worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub scrape_rx: Option<Receiver<Result<RunSummary>>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // Viewer and scraper share one file
        state.scrape.store_path = state.viewer.store_path.clone();

        let (catalog, status) = match Store::load(&state.viewer.store_path) {
            Ok(store) => {
                let catalog = GlazeCatalog::from_store(&store);
                logf!("Init: {} combinations, {} glazes from {}",
                    catalog.entries().len(), catalog.glazes().len(),
                    state.viewer.store_path.display());
                let status = if catalog.is_empty() {
                    s!("Store is empty. Press Scrape to fetch combinations")
                } else {
                    format!("Loaded {} combinations", catalog.entries().len())
                };
                (catalog, status)
            }
            Err(e) => {
                loge!("Init: {e}");
                (GlazeCatalog::default(), format!("Error: {e}"))
            }
        };

        let thumbs = ThumbCache::new(state.viewer.base_url.clone(), state.viewer.thumb_px);

        Self {
            state,
            catalog,
            thumbs,
            status: Arc::new(Mutex::new(status)),
            running: false,
            scrape_rx: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn set_status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);
        self.thumbs.poll(ctx);

        egui::SidePanel::left("glazes")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                components::glaze_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::combo_table::draw(ui, self);
        });

        if self.running {
            // status text is written from the worker thread
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
