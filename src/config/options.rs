// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;

/// Which layer the queried glaze sits in on the vendor's search page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// Query order used by the pipeline.
    pub const ALL: [Position; 2] = [Position::Top, Position::Bottom];

    pub fn as_param(&self) -> &'static str {
        match self { Position::Top => "top", Position::Bottom => "bottom" }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Where the glazes to scrape come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlazeSelector {
    /// Read the dropdown; `None` = no limit.
    Dropdown { limit: Option<usize> },
    /// Skip the dropdown and use these names.
    Named(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub glazes: GlazeSelector,
    /// Site origin, no trailing slash.
    pub base_url: String,
    /// Prepended verbatim to every page URL; empty = direct.
    pub proxy_prefix: String,
    pub max_pages: u32,
    pub pause_ms: u64,
    pub store_path: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            glazes: GlazeSelector::Dropdown { limit: Some(DEFAULT_GLAZE_LIMIT) },
            base_url: s!(SITE_BASE),
            proxy_prefix: s!(PROXY_PREFIX),
            max_pages: DEFAULT_MAX_PAGES,
            pause_ms: REQUEST_PAUSE_MS,
            store_path: PathBuf::from(STORE_FILE),
        }
    }
}

impl ScrapeOptions {
    /// Layering index page (carries the glaze dropdown).
    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LAYERING_PATH)
    }

    /// One page of combinations for `glaze_id` in `position`.
    pub fn combinations_url(&self, position: Position, glaze_id: &str, page: u32) -> String {
        format!("{}?{}={}&page={}", self.index_url(), position.as_param(), glaze_id, page)
    }

    /// What actually goes on the wire.
    pub fn proxied(&self, url: &str) -> String {
        format!("{}{}", self.proxy_prefix, url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerOptions {
    pub store_path: PathBuf,
    /// Used to resolve relative image/detail URLs found in the store.
    pub base_url: String,
    pub thumb_px: u32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(STORE_FILE),
            base_url: s!(SITE_BASE),
            thumb_px: THUMB_PX,
        }
    }
}
