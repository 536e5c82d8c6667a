// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;
use glaze_scrape::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())?;
    Ok(())
}
