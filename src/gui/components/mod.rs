// src/gui/components/mod.rs
pub mod action_bar;
pub mod combo_table;
pub mod glaze_panel;
