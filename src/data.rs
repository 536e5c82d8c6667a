// src/data.rs
//
// Viewer-side data, built once from a Store.
//
// - GlazeCatalog: canonical list of combinations with display names
//                 resolved, plus the sorted glaze list for search.
// - Selection / SelectionView: which catalog entries to show for the
//                 glazes the user picked (both glazes must be picked).

use std::collections::{BTreeSet, HashSet};

use crate::combo::{Combination, ComboKey};
use crate::core::sanitize::display_name;
use crate::store::Store;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Store key, `idA/idB`
    pub key: String,
    /// Display names of the two glazes, in key order
    pub names: (String, String),
    pub combos: Vec<Combination>,
}

impl CatalogEntry {
    /// `"PC-12 Blue Rutile and Obsidian"`
    pub fn title(&self) -> String {
        format!("{} and {}", self.names.0, self.names.1)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GlazeCatalog {
    entries: Vec<CatalogEntry>,
    glazes: Vec<String>,
}

impl GlazeCatalog {
    pub fn from_store(store: &Store) -> Self {
        let mut glazes = BTreeSet::new();
        let mut entries = Vec::with_capacity(store.len());

        for (key, combos) in store.iter() {
            let Some(ck) = ComboKey::parse(key) else {
                logd!("Catalog: skipping malformed key {key:?}");
                continue;
            };
            let (a, b) = ck.ids();
            let names = (display_name(a), display_name(b));
            glazes.insert(names.0.clone());
            glazes.insert(names.1.clone());
            entries.push(CatalogEntry { key: s!(key), names, combos: combos.to_vec() });
        }

        Self { entries, glazes: glazes.into_iter().collect() }
    }

    pub fn entries(&self) -> &[CatalogEntry] { &self.entries }

    /// Every glaze display name, sorted.
    pub fn glazes(&self) -> &[String] { &self.glazes }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Case-insensitive substring match on the query as typed (spaces
    /// included). Empty query → nothing.
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        let q = query.to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.glazes
            .iter()
            .filter(|g| g.to_lowercase().contains(&q))
            .map(String::as_str)
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct Selection<'a> {
    pub names: &'a [String],
}

impl<'a> Selection<'a> {
    #[inline] pub fn is_none(&self) -> bool { self.names.is_empty() }

    fn set(&self) -> HashSet<&'a str> {
        self.names.iter().map(String::as_str).collect()
    }
}

/// Filtered view for display; holds entry indexes into the catalog.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    pub entry_ix: Vec<usize>,
    catalog: &'a GlazeCatalog,
}

impl<'a> SelectionView<'a> {
    pub fn from_catalog(catalog: &'a GlazeCatalog, sel: Selection<'_>) -> Self {
        if sel.is_none() {
            return Self { entry_ix: Vec::new(), catalog };
        }
        let picked = sel.set();
        let entry_ix = catalog
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| picked.contains(e.names.0.as_str()) && picked.contains(e.names.1.as_str()))
            .map(|(i, _)| i)
            .collect();
        Self { entry_ix, catalog }
    }

    pub fn len(&self) -> usize { self.entry_ix.len() }
    pub fn is_empty(&self) -> bool { self.entry_ix.is_empty() }

    pub fn entry(&self, i: usize) -> Option<&'a CatalogEntry> {
        self.entry_ix.get(i).and_then(|&ix| self.catalog.entries.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogEntry> + '_ {
        self.entry_ix.iter().filter_map(|&ix| self.catalog.entries.get(ix))
    }
}
