// src/specs/glazes.rs
//! Glaze names from the layering page's search dropdowns
//! (`div.search-glazes option`). Both the top and bottom dropdown list the
//! same glazes, so names are deduplicated in first-seen order.

use std::collections::HashSet;

use scraper::Html;

use crate::config::consts::{GLAZE_OPTIONS, GLAZE_PLACEHOLDERS};
use crate::config::options::ScrapeOptions;
use crate::core::html::{selector, text_of};
use crate::core::PageSource;
use crate::error::Result;

pub fn fetch(source: &dyn PageSource, opts: &ScrapeOptions, limit: Option<usize>) -> Result<Vec<String>> {
    let url = opts.proxied(&opts.index_url());
    let doc = source.get(&url)?;
    parse(&doc, limit)
}

/// Option texts minus placeholders and blanks; deduped; first `limit` kept.
pub fn parse(doc: &str, limit: Option<usize>) -> Result<Vec<String>> {
    let html = Html::parse_document(doc);
    let options = selector(GLAZE_OPTIONS)?;

    let mut seen = HashSet::new();
    let names = html
        .select(&options)
        .map(text_of)
        .filter(|t| !t.is_empty() && !GLAZE_PLACEHOLDERS.contains(&t.as_str()))
        .filter(|t| seen.insert(t.clone()))
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <div class="search-glazes">
          <select><option>Select Top Glaze</option><option> Blue Rutile </option><option>Obsidian</option></select>
          <select><option>Select Bottom Glaze</option><option>Blue Rutile</option><option></option><option>Oatmeal</option></select>
        </div>
        <div class="other"><select><option>Not a glaze</option></select></div>"#;

    #[test]
    fn placeholders_blanks_and_repeats_are_dropped() {
        assert_eq!(parse(DOC, None).unwrap(), vec!["Blue Rutile", "Obsidian", "Oatmeal"]);
    }

    #[test]
    fn limit_applies_after_dedupe() {
        assert_eq!(parse(DOC, Some(2)).unwrap(), vec!["Blue Rutile", "Obsidian"]);
        assert!(parse(DOC, Some(0)).unwrap().is_empty());
    }
}
