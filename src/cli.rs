// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::consts::{DEFAULT_GLAZE_LIMIT, DEFAULT_MAX_PAGES, REQUEST_PAUSE_MS, STORE_FILE},
    config::options::{GlazeSelector, ScrapeOptions},
    core::HttpSource,
    error::{Result, ScrapeError},
    progress::Progress,
    scrape,
};

/// Scrape AMACO layering combinations into a local JSON store.
#[derive(Debug, Parser)]
#[command(name = "glaze_scrape", version)]
pub struct Args {
    /// Store file to merge into
    #[arg(long, value_name = "PATH", default_value = STORE_FILE)]
    pub store: PathBuf,

    /// Scrape only the first N glazes of the dropdown [default: 10]
    #[arg(long, value_name = "N", conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Scrape every glaze in the dropdown
    #[arg(long)]
    pub all: bool,

    /// Scrape this glaze instead of reading the dropdown (repeatable)
    #[arg(long = "glaze", value_name = "NAME")]
    pub glazes: Vec<String>,

    /// CORS proxy prefix placed in front of every page URL
    #[arg(long, value_name = "PREFIX", conflicts_with = "no_proxy")]
    pub proxy: Option<String>,

    /// Talk to the site directly
    #[arg(long)]
    pub no_proxy: bool,

    /// Site origin
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Stop following pagination after this many pages per glaze/position
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PAGES,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: u32,

    /// Pause between requests
    #[arg(long, value_name = "MS", default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Print the dropdown glazes and exit
    #[arg(long)]
    pub list_glazes: bool,

    /// Print the final store JSON to stdout
    #[arg(long)]
    pub print: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions { store_path: self.store.clone(), ..Default::default() };

        opts.glazes = if !self.glazes.is_empty() {
            GlazeSelector::Named(self.glazes.clone())
        } else if self.all {
            GlazeSelector::Dropdown { limit: None }
        } else {
            GlazeSelector::Dropdown { limit: Some(self.limit.unwrap_or(DEFAULT_GLAZE_LIMIT)) }
        };

        if self.no_proxy {
            opts.proxy_prefix = s!();
        } else if let Some(p) = &self.proxy {
            opts.proxy_prefix = p.clone();
        }
        if let Some(b) = &self.base_url {
            opts.base_url = b.trim_end_matches('/').to_string();
        }
        opts.max_pages = self.max_pages;
        opts.pause_ms = self.pause_ms;
        opts
    }
}

/// Prints pipeline progress to stderr.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, glaze: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {glaze} done", self.done, self.total);
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init_stderr(args.verbose);
    let opts = args.to_options();
    let source = HttpSource::new()?;

    if args.list_glazes {
        for glaze in scrape::fetch_glazes(&source, &opts)? {
            println!("{glaze}");
        }
        return Ok(());
    }

    let mut prog = CliProgress::default();
    let summary = scrape::run(&source, &opts, Some(&mut prog))?;

    if args.print {
        let json = summary
            .store
            .to_pretty_json()
            .map_err(|source| ScrapeError::Json { path: summary.store_path.clone(), source })?;
        println!("{json}");
    }

    eprintln!(
        "Wrote {} ({} keys, {} records; +{} new, {} duplicates dropped, {} cards skipped, {} pages)",
        summary.store_path.display(),
        summary.store.len(),
        summary.records_after,
        summary.records_after.saturating_sub(summary.records_before),
        summary.clean.dropped,
        summary.skipped,
        summary.pages,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cli").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_give_default_options() {
        let opts = parse(&[]).to_options();
        assert_eq!(opts, ScrapeOptions::default());
    }

    #[test]
    fn named_glazes_win_over_limit() {
        let opts = parse(&["--glaze", "Blue Rutile", "--glaze", "Obsidian", "--limit", "3"]).to_options();
        assert_eq!(opts.glazes, GlazeSelector::Named(vec![s!("Blue Rutile"), s!("Obsidian")]));
    }

    #[test]
    fn all_and_limit_conflict() {
        assert!(Args::try_parse_from(["cli", "--all", "--limit", "4"]).is_err());
        assert_eq!(parse(&["--all"]).to_options().glazes, GlazeSelector::Dropdown { limit: None });
    }

    #[test]
    fn proxy_overrides() {
        assert_eq!(parse(&["--no-proxy"]).to_options().proxy_prefix, "");
        assert_eq!(parse(&["--proxy", "http://p/"]).to_options().proxy_prefix, "http://p/");
        assert!(Args::try_parse_from(["cli", "--no-proxy", "--proxy", "x"]).is_err());
    }

    #[test]
    fn max_pages_must_be_positive() {
        assert!(Args::try_parse_from(["cli", "--max-pages", "0"]).is_err());
        assert_eq!(parse(&["--max-pages", "5", "--base-url", "http://h/"]).to_options().base_url, "http://h");
    }
}
