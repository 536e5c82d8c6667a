// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific readers for the vendor's layering pages. Each spec knows
//! *where the data lives in the HTML* for one page shape and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** (`scraper` selectors from `config::consts`).
//! - A thin `fetch` per page that builds the URL, goes through
//!   `core::net::PageSource` and hands the body to the parser.
//!
//! ## What does **not** live here
//! - Merging, dedupe, persistence: `store`.
//! - Looping over glazes/positions/pages: `scrape`.
//! - Anything GUI.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → scrape::run → specs::glazes::fetch
//!                        → specs::combinations::fetch (per page)
//!                        → store::Store::{merge, clean, save}
//! ```
//!
//! ## Testing notes
//! Parsers take `&str` and are exercised against saved fixtures in
//! `tests/fixtures/`.
pub mod combinations;
pub mod glazes;
