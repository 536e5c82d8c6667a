// tests/page_parsing.rs
mod common;

use common::fixture;
use glaze_scrape::combo::ComboKey;
use glaze_scrape::specs::{combinations, glazes};

const TOP_P1: &str = "https://amaco.com/resources/layering?top=obsidian&page=1";
const TOP_P2: &str = "https://amaco.com/resources/layering?top=obsidian&page=2";

#[test]
fn dropdown_glazes_in_page_order() {
    let doc = fixture("layering_index.html");
    assert_eq!(glazes::parse(&doc, None).unwrap(), vec!["Obsidian", "PC-12 Blue Rutile", "Oatmeal"]);
    assert_eq!(glazes::parse(&doc, Some(10)).unwrap().len(), 3);
}

#[test]
fn first_page_prefers_lazy_image_and_links_onward() {
    let page = combinations::parse(&fixture("top_obsidian_p1.html"), TOP_P1, 1).unwrap();

    assert!(page.has_next);
    assert_eq!(page.combos.len(), 3);
    assert_eq!(
        page.combos[0].image_url.as_deref(),
        Some("https://cdn.amaco.com/layering/obsidian-over-oatmeal.jpg")
    );
    assert_eq!(
        page.combos[1].image_url.as_deref(),
        Some("https://cdn.amaco.com/layering/obsidian-over-pc-12-blue-rutile.jpg")
    );
    // parsed, but rejected later when keyed
    assert!(ComboKey::from_url(&page.combos[2].url).is_err());
}

#[test]
fn last_page_has_no_next() {
    let page = combinations::parse(&fixture("top_obsidian_p2.html"), TOP_P2, 2).unwrap();
    assert!(!page.has_next);
    assert_eq!(page.combos.len(), 1);
}

#[test]
fn page_without_pagination_is_final() {
    let url = "https://amaco.com/resources/layering?bottom=obsidian&page=1";
    let page = combinations::parse(&fixture("bottom_obsidian_p1.html"), url, 1).unwrap();
    assert!(!page.has_next);
    assert_eq!(ComboKey::from_url(&page.combos[0].url).unwrap().to_string(), "oatmeal/obsidian");
}

#[test]
fn page_without_cards_is_empty() {
    let page = combinations::parse("<html><body><p>No results</p></body></html>", TOP_P1, 1).unwrap();
    assert!(page.combos.is_empty());
    assert!(!page.has_next);
}
