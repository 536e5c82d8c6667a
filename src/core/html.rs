// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};
use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector { css: s!(css), reason: e.to_string() })
}

/// All descendant text, whitespace-collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// First attribute present among `names`, in order.
pub fn first_attr<'a>(el: ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|n| el.value().attr(n))
}
