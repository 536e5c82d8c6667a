// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod combo;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod gui;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;
