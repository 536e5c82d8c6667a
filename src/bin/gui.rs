// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use glaze_scrape::{config::state::AppState, gui, log};

fn main() {
    if let Err(e) = log::init_file(&log::default_log_path()) {
        eprintln!("Log file unavailable ({e}); logging to stderr");
        log::init_stderr(false);
    }

    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Glaze Layering Viewer")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
