// src/config/state.rs
use super::options::{ScrapeOptions, ViewerOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text currently in the glaze search box
    pub query: String,

    /// Display names picked from suggestions, in pick order
    pub selected: Vec<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            selected: Vec::new(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

impl GuiState {
    /// Add to the selection; false if it was already there.
    pub fn pick(&mut self, name: &str) -> bool {
        if self.selected.iter().any(|s| s == name) {
            return false;
        }
        self.selected.push(s!(name));
        true
    }

    pub fn unpick(&mut self, name: &str) {
        self.selected.retain(|s| s != name);
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub scrape: ScrapeOptions,
    pub viewer: ViewerOptions,
    pub gui: GuiState,
}
