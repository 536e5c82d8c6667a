// src/config/consts.rs

// Net config
pub const SITE_BASE: &str = "https://amaco.com";
pub const LAYERING_PATH: &str = "/resources/layering";
pub const PROXY_PREFIX: &str = "https://cors-anywhere.herokuapp.com/";
pub const USER_AGENT: &str = concat!("glaze_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Glaze dropdown
pub const GLAZE_OPTIONS: &str = "div.search-glazes option";
pub const GLAZE_PLACEHOLDERS: &[&str] = &["Select Top Glaze", "Select Bottom Glaze"];
pub const DEFAULT_GLAZE_LIMIT: usize = 10;

// Combination pages
pub const CARD: &str = ".card-combination.title-link-parent";
pub const CARD_IMAGE: &str = ".card-combination__image img";
pub const CARD_LINK: &str = ".title-link.text-reset";
pub const PAGE_LINK: &str = ".page-link";
pub const PAIR_DELIM: &str = "-over-";
pub const DEFAULT_MAX_PAGES: u32 = 200;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Local files
pub const STORE_FILE: &str = "glaze_combinations.json";
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Viewer
pub const THUMB_PX: u32 = 160;
pub const THUMB_ROW_H: f32 = 172.0;
