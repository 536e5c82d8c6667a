// tests/common/mod.rs
//
// Fixture-backed PageSource: serves canned HTML by exact URL and records
// every request in order.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use glaze_scrape::config::options::{GlazeSelector, ScrapeOptions};
use glaze_scrape::core::PageSource;
use glaze_scrape::error::{Result, ScrapeError};

pub const PROXY: &str = "http://proxy.test/";
pub const BASE: &str = "https://amaco.com";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FixtureSource {
    pub fn with(mut self, url: &str, fixture_name: &str) -> Self {
        self.pages.insert(format!("{PROXY}{url}"), fixture(fixture_name));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageSource for FixtureSource {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

/// Index + the three Obsidian result pages.
pub fn obsidian_site() -> FixtureSource {
    FixtureSource::default()
        .with(&format!("{BASE}/resources/layering"), "layering_index.html")
        .with(&format!("{BASE}/resources/layering?top=obsidian&page=1"), "top_obsidian_p1.html")
        .with(&format!("{BASE}/resources/layering?top=obsidian&page=2"), "top_obsidian_p2.html")
        .with(&format!("{BASE}/resources/layering?bottom=obsidian&page=1"), "bottom_obsidian_p1.html")
}

pub fn options(store_path: PathBuf, glazes: GlazeSelector) -> ScrapeOptions {
    ScrapeOptions {
        glazes,
        base_url: BASE.to_string(),
        proxy_prefix: PROXY.to_string(),
        pause_ms: 0,
        store_path,
        ..Default::default()
    }
}
