// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod progress;
pub mod thumbs;

pub use app::run;
