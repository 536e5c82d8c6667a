// tests/selection_view.rs
//
// Catalog + SelectionView behavior without UI.
//
use glaze_scrape::combo::{Combination, ComboKey};
use glaze_scrape::data::{GlazeCatalog, Selection, SelectionView};
use glaze_scrape::store::Store;

fn catalog() -> GlazeCatalog {
    let store: Store = [
        ("obsidian", "pc-12-blue-rutile"),
        ("oatmeal", "obsidian"),
        ("oatmeal", "pc-12-blue-rutile"),
    ]
    .into_iter()
    .map(|(a, b)| {
        (ComboKey::new(a, b), Combination::new(format!("/l/{a}-over-{b}"), Some(format!("{a}.jpg"))))
    })
    .collect();
    GlazeCatalog::from_store(&store)
}

fn picked(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn glaze_list_uses_display_names() {
    let cat = catalog();
    assert_eq!(cat.glazes(), ["OATMEAL", "OBSIDIAN", "PC-12 Blue Rutile"]);
    assert_eq!(cat.entries()[0].title(), "OATMEAL and OBSIDIAN");
}

#[test]
fn suggestions_are_case_insensitive_substrings() {
    let cat = catalog();
    assert_eq!(cat.suggestions("ob"), vec!["OBSIDIAN"]);
    assert_eq!(cat.suggestions("RUT"), vec!["PC-12 Blue Rutile"]);
    // typed text is not trimmed; a space only matches multi-word names
    assert_eq!(cat.suggestions("e r"), vec!["PC-12 Blue Rutile"]);
    assert_eq!(cat.suggestions(" "), vec!["PC-12 Blue Rutile"]);
    assert!(cat.suggestions(" rut ").is_empty());
    assert!(cat.suggestions("").is_empty());
    assert!(cat.suggestions("zzz").is_empty());
}

#[test]
fn selection_view_none_one_pair_all() {
    let cat = catalog();

    // None
    let view = SelectionView::from_catalog(&cat, Selection { names: &[] });
    assert!(view.is_empty());

    // One glaze alone never shows a combination
    let one = picked(&["OBSIDIAN"]);
    assert!(SelectionView::from_catalog(&cat, Selection { names: &one }).is_empty());

    // Pair
    let pair = picked(&["OBSIDIAN", "PC-12 Blue Rutile"]);
    let view = SelectionView::from_catalog(&cat, Selection { names: &pair });
    assert_eq!(view.len(), 1);
    assert_eq!(view.entry(0).map(|e| e.key.as_str()), Some("obsidian/pc-12-blue-rutile"));
    assert!(view.entry(1).is_none());

    // All
    let all = cat.glazes().to_vec();
    let view = SelectionView::from_catalog(&cat, Selection { names: &all });
    let keys: Vec<_> = view.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["oatmeal/obsidian", "oatmeal/pc-12-blue-rutile", "obsidian/pc-12-blue-rutile"]);
}
