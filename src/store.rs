// src/store.rs
//
// The on-disk combination store: one JSON object, `"idA/idB" -> [{url, imageUrl}]`.
// Keys are kept in a BTreeMap so the written file is stable across runs.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::combo::{Combination, ComboKey};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    map: BTreeMap<String, Vec<Combination>>,
}

/// What `Store::clean` changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Keys that were not in sorted form and got folded into their sorted bucket.
    pub rekeyed: usize,
    /// Duplicate `(url, imageUrl)` records removed.
    pub dropped: usize,
}

impl Store {
    pub fn new() -> Self { Self::default() }

    /// Number of keys.
    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Number of records across all keys.
    pub fn record_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    pub fn get(&self, key: &str) -> Option<&[Combination]> {
        self.map.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Combination])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn push(&mut self, key: &ComboKey, combo: Combination) {
        self.map.entry(key.to_string()).or_default().push(combo);
    }

    /// Append every record of `other` after this store's records for the same key.
    pub fn merge(&mut self, other: Store) {
        for (key, combos) in other.map {
            self.map.entry(key).or_default().extend(combos);
        }
    }

    /// Fold unsorted keys into their sorted form, then drop duplicate
    /// `(url, imageUrl)` pairs per key, keeping the first occurrence.
    pub fn clean(&mut self) -> CleanStats {
        let mut stats = CleanStats::default();

        let unsorted: Vec<String> = self
            .map
            .keys()
            .filter(|k| ComboKey::parse(k).is_some_and(|ck| ck.to_string() != **k))
            .cloned()
            .collect();
        for old in unsorted {
            if let (Some(combos), Some(ck)) = (self.map.remove(&old), ComboKey::parse(&old)) {
                self.map.entry(ck.to_string()).or_default().extend(combos);
                stats.rekeyed += 1;
            }
        }

        for combos in self.map.values_mut() {
            let before = combos.len();
            let mut seen: HashSet<(String, Option<String>)> = HashSet::with_capacity(before);
            combos.retain(|c| seen.insert((c.url.clone(), c.image_url.clone())));
            stats.dropped += before - combos.len();
        }
        stats
    }

    /// Read a store file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Store> {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logf!("Store: {} not found, starting empty", path.display());
                return Ok(Store::new());
            }
            Err(e) => return Err(ScrapeError::io(path, e)),
        };
        if text.trim().is_empty() {
            return Ok(Store::new());
        }
        let store: Store = serde_json::from_str(&text)
            .map_err(|source| ScrapeError::Json { path: path.to_path_buf(), source })?;
        logd!("Store: loaded {} keys / {} records from {}",
            store.len(), store.record_count(), path.display());
        Ok(store)
    }

    /// Pretty JSON with 4-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write to `<path>.tmp` and rename over `path`, so the old file survives a failed write.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ScrapeError::io(parent, e))?;
            }
        }
        let json = self
            .to_pretty_json()
            .map_err(|source| ScrapeError::Json { path: path.to_path_buf(), source })?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = Path::new(&tmp_name);

        let mut file = fs::File::create(tmp).map_err(|e| ScrapeError::io(tmp, e))?;
        file.write_all(json.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.sync_all())
            .map_err(|e| ScrapeError::io(tmp, e))?;
        drop(file);
        fs::rename(tmp, path).map_err(|e| ScrapeError::io(path, e))?;

        logf!("Store: saved {} keys / {} records to {}",
            self.len(), self.record_count(), path.display());
        Ok(())
    }
}

impl FromIterator<(ComboKey, Combination)> for Store {
    fn from_iter<I: IntoIterator<Item = (ComboKey, Combination)>>(iter: I) -> Self {
        let mut store = Store::new();
        for (key, combo) in iter {
            store.push(&key, combo);
        }
        store
    }
}
