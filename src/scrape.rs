// src/scrape.rs
use std::{path::PathBuf, thread, time::Duration};

use crate::{
    combo::ComboKey,
    config::options::{GlazeSelector, Position, ScrapeOptions},
    core::{sanitize::glaze_slug, PageSource},
    error::Result,
    progress::Progress,
    specs,
    store::{CleanStats, Store},
};

/// Everything one glaze produced, both positions, all pages.
#[derive(Debug, Default)]
pub struct GlazeScrape {
    pub store: Store,
    pub pages: u32,
    /// Cards whose URL did not split into two ids.
    pub skipped: usize,
}

/// Result of a pass over all glazes (no file IO).
#[derive(Debug, Default)]
pub struct Collected {
    pub glazes: Vec<String>,
    pub store: Store,
    pub pages: u32,
    pub skipped: usize,
}

#[derive(Debug)]
pub struct RunSummary {
    pub glazes: Vec<String>,
    pub pages: u32,
    pub skipped: usize,
    /// Records in the store file before / after this run.
    pub records_before: usize,
    pub records_after: usize,
    pub clean: CleanStats,
    pub store_path: PathBuf,
    pub store: Store,
}

/// Glaze names to scrape: the dropdown (limited) or the caller's list.
pub fn fetch_glazes(source: &dyn PageSource, opts: &ScrapeOptions) -> Result<Vec<String>> {
    match &opts.glazes {
        GlazeSelector::Dropdown { limit } => {
            logf!("Fetching glaze options (limit={limit:?})");
            specs::glazes::fetch(source, opts, *limit)
        }
        GlazeSelector::Named(names) => Ok(names.clone()),
    }
}

/// Walk every results page for `glaze`, first as top layer, then as bottom.
pub fn fetch_combinations(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    glaze: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<GlazeScrape> {
    let glaze_id = glaze_slug(glaze);
    let mut out = GlazeScrape::default();

    for position in Position::ALL {
        let mut page = 1u32;
        loop {
            if out.pages > 0 {
                pause(opts.pause_ms);
            }
            progress!(progress, "{glaze}: {position} page {page}");
            let parsed = specs::combinations::fetch(source, opts, position, &glaze_id, page)?;
            out.pages += 1;
            logd!("{glaze_id} {position} p{page}: {} cards, next={}", parsed.combos.len(), parsed.has_next);

            for combo in parsed.combos {
                match ComboKey::from_url(&combo.url) {
                    Ok(key) => out.store.push(&key, combo),
                    Err(e) => {
                        logw!("Skipping card: {e}");
                        out.skipped += 1;
                    }
                }
            }

            if !parsed.has_next {
                break;
            }
            if page >= opts.max_pages {
                logw!("{glaze_id} {position}: stopping at max_pages={}", opts.max_pages);
                break;
            }
            page += 1;
        }
    }
    Ok(out)
}

/// Glaze list + all combination pages, accumulated in memory.
pub fn collect(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    progress!(progress, "Fetching glaze options...");
    let glazes = fetch_glazes(source, opts)?;
    logf!("Glazes: {glazes:?}");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(glazes.len());
    }

    let mut out = Collected::default();
    for glaze in &glazes {
        if out.pages > 0 {
            pause(opts.pause_ms);
        }
        progress!(progress, "Fetching combinations for {glaze}...");
        let one = fetch_combinations(source, opts, glaze, reborrow(&mut progress))?;
        logf!("{glaze}: {} keys / {} records over {} pages",
            one.store.len(), one.store.record_count(), one.pages);

        out.pages += one.pages;
        out.skipped += one.skipped;
        out.store.merge(one.store);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(glaze);
        }
    }
    out.glazes = glazes;
    Ok(out)
}

/// Load the store, scrape, merge, clean, save.
/// The store is loaded before any request so a broken file fails fast,
/// and written only after every page succeeded.
pub fn run(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut store = Store::load(&opts.store_path)?;
    let records_before = store.record_count();

    let collected = collect(source, opts, reborrow(&mut progress));
    let collected = match collected {
        Ok(c) => c,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    store.merge(collected.store);
    let clean = store.clean();
    let saved = store.save(&opts.store_path);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    saved?;

    Ok(RunSummary {
        glazes: collected.glazes,
        pages: collected.pages,
        skipped: collected.skipped,
        records_before,
        records_after: store.record_count(),
        clean,
        store_path: opts.store_path.clone(),
        store,
    })
}

/// Hand the sink to a callee without giving up our own borrow of it.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}
