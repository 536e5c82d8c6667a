// src/gui/actions.rs
//
// Things the buttons do. Scrape runs on its own thread; the UI polls the
// result channel every frame while `running` is set.

use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    core::HttpSource,
    data::GlazeCatalog,
    error::ScrapeError,
    gui::{app::App, progress::GuiProgress},
    scrape,
    store::Store,
};

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let opts = app.state.scrape.clone();
    logf!("Scrape: Begin glazes={:?} store={}", opts.glazes, opts.store_path.display());

    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = HttpSource::new().and_then(|src| scrape::run(&src, &opts, Some(&mut prog)));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.running = true;
    app.scrape_rx = Some(rx);
    app.set_status("Scraping...");
}

/// Pick up a finished scrape, if any.
pub fn poll_scrape(app: &mut App) {
    let Some(rx) = &app.scrape_rx else { return };
    let msg = match rx.try_recv() {
        Err(TryRecvError::Empty) => return,
        Ok(Ok(summary)) => {
            logf!(
                "Scrape: OK glazes={} pages={} records {} -> {}",
                summary.glazes.len(), summary.pages, summary.records_before, summary.records_after
            );
            app.catalog = GlazeCatalog::from_store(&summary.store);
            app.thumbs.retry_failed();
            format!(
                "Scraped {} glaze(s): {} combinations, +{} records",
                summary.glazes.len(),
                summary.store.len(),
                summary.records_after.saturating_sub(summary.records_before)
            )
        }
        Ok(Err(e)) => {
            loge!("Scrape: Error: {e}");
            format!("Error: {e}")
        }
        Err(TryRecvError::Disconnected) => {
            let e = ScrapeError::WorkerGone;
            loge!("Scrape: {e}");
            format!("Error: {e}")
        }
    };
    app.running = false;
    app.scrape_rx = None;
    app.set_status(msg);
}

/// Re-read the store file from disk.
pub fn reload(app: &mut App) {
    match Store::load(&app.state.viewer.store_path) {
        Ok(store) => {
            app.catalog = GlazeCatalog::from_store(&store);
            app.thumbs.retry_failed();
            app.set_status(format!(
                "Loaded {} combinations / {} glazes",
                app.catalog.entries().len(),
                app.catalog.glazes().len()
            ));
        }
        Err(e) => {
            loge!("Reload: {e}");
            app.set_status(format!("Error: {e}"));
        }
    }
}
