// src/combo.rs
//
// One scraped layering photo, and the order-independent key that buckets it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::consts::PAIR_DELIM;
use crate::error::{Result, ScrapeError};

/// `{ "url": ..., "imageUrl": ... }` as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    /// Detail page, as found in the card's link.
    pub url: String,
    /// `data-src` if present, else `src`; null when the card had neither.
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Combination {
    pub fn new(url: impl Into<String>, image_url: Option<String>) -> Self {
        Self { url: url.into(), image_url }
    }

    pub fn key(&self) -> Result<ComboKey> {
        ComboKey::from_url(&self.url)
    }
}

/// Two glaze ids, always stored in sorted order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComboKey {
    lo: String,
    hi: String,
}

impl ComboKey {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b { Self { lo: a, hi: b } } else { Self { lo: b, hi: a } }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let (top, bottom) = extract_glaze_ids(url)?;
        Ok(Self::new(top, bottom))
    }

    /// Parse a stored `"idA/idB"` key. Re-sorts, so hand-edited files still bucket correctly.
    pub fn parse(key: &str) -> Option<Self> {
        let (a, b) = key.split_once('/')?;
        if a.is_empty() || b.is_empty() { return None; }
        Some(Self::new(a, b))
    }

    pub fn ids(&self) -> (&str, &str) {
        (&self.lo, &self.hi)
    }
}

impl fmt::Display for ComboKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lo, self.hi)
    }
}

/// `.../layering/blue-rutile-over-obsidian` → `("blue-rutile", "obsidian")`.
/// Order is (top, bottom) as it appears in the URL.
pub fn extract_glaze_ids(url: &str) -> Result<(String, String)> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);

    // Only the first two pieces count: `a-over-b-over-c` is `(a, b)`.
    let mut parts = last.split(PAIR_DELIM);
    match (parts.next(), parts.next()) {
        (Some(top), Some(bottom)) if !top.is_empty() && !bottom.is_empty() => {
            Ok((s!(top), s!(bottom)))
        }
        _ => Err(ScrapeError::BadCombinationUrl(s!(url))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_come_from_trailing_segment() {
        let (t, b) = extract_glaze_ids(
            "https://amaco.com/resources/layering/pc-12-blue-rutile-over-c-10-black-cherry",
        ).unwrap();
        assert_eq!((t.as_str(), b.as_str()), ("pc-12-blue-rutile", "c-10-black-cherry"));
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        let (t, b) = extract_glaze_ids("/layering/a-over-b/?ref=top#img").unwrap();
        assert_eq!((t.as_str(), b.as_str()), ("a", "b"));
    }

    #[test]
    fn missing_delimiter_is_an_error() {
        assert!(matches!(
            extract_glaze_ids("https://amaco.com/resources/layering"),
            Err(ScrapeError::BadCombinationUrl(_))
        ));
        assert!(extract_glaze_ids("/layering/-over-b").is_err());
    }

    #[test]
    fn extra_delimiters_keep_first_two_ids() {
        let (t, b) = extract_glaze_ids("/layering/a-over-b-over-c").unwrap();
        assert_eq!((t.as_str(), b.as_str()), ("a", "b"));
    }

    #[test]
    fn key_is_sorted_regardless_of_layer_order() {
        let over = ComboKey::from_url("/l/obsidian-over-blue-rutile").unwrap();
        let under = ComboKey::from_url("/l/blue-rutile-over-obsidian").unwrap();
        assert_eq!(over, under);
        assert_eq!(over.to_string(), "blue-rutile/obsidian");
    }

    #[test]
    fn parse_round_trips_display() {
        let k = ComboKey::parse("zebra/apple").unwrap();
        assert_eq!(k.to_string(), "apple/zebra");
        assert!(ComboKey::parse("no-slash").is_none());
        assert!(ComboKey::parse("/b").is_none());
    }

    #[test]
    fn null_image_url_serializes_as_null() {
        let c = Combination::new("/l/a-over-b", None);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"url":"/l/a-over-b","imageUrl":null}"#);
        let back: Combination = serde_json::from_str(r#"{"url":"/l/a-over-b"}"#).unwrap();
        assert_eq!(back, c);
    }
}
