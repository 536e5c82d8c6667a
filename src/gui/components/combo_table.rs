// src/gui/components/combo_table.rs
//
// One row per combination whose two glazes are both selected:
// title | horizontally scrolling strip of thumbnails (click → detail page).

use eframe::egui::{self, OpenUrl, Sense, Spinner, Vec2};
use egui_extras::{Column, TableBuilder};

use crate::combo::Combination;
use crate::config::consts::THUMB_ROW_H;
use crate::core::net;
use crate::data::{CatalogEntry, Selection, SelectionView};
use crate::gui::{app::App, thumbs::{Thumb, ThumbCache}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { catalog, state, thumbs, .. } = app;

    if catalog.is_empty() {
        ui.label("No combinations in the store yet. Press Scrape.");
        return;
    }

    let view = SelectionView::from_catalog(catalog, Selection { names: &state.gui.selected });
    if view.is_empty() {
        ui.label("Select glazes on the left; combinations show when both glazes are selected.");
        return;
    }
    ui.label(format!("{} combination(s)", view.len()));

    let base = state.viewer.base_url.as_str();
    let ctx = ui.ctx().clone();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(240.0).at_least(120.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            header.col(|ui| { ui.strong("Combination"); });
            header.col(|ui| { ui.strong("Layering photos"); });
        })
        .body(|body| {
            body.rows(THUMB_ROW_H, view.len(), |mut row| {
                let Some(entry) = view.entry(row.index()) else { return };
                row.col(|ui| {
                    ui.label(entry.title());
                });
                row.col(|ui| {
                    thumb_strip(ui, &ctx, thumbs, base, entry);
                });
            });
        });
}

fn thumb_strip(ui: &mut egui::Ui, ctx: &egui::Context, thumbs: &mut ThumbCache, base: &str, entry: &CatalogEntry) {
    egui::ScrollArea::horizontal()
        .id_salt(("thumbs", entry.key.as_str()))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for combo in &entry.combos {
                    thumb(ui, ctx, thumbs, base, combo);
                }
            });
        });
}

fn thumb(ui: &mut egui::Ui, ctx: &egui::Context, thumbs: &mut ThumbCache, base: &str, combo: &Combination) {
    let px = thumbs.px() as f32;
    let detail = net::resolve(base, &combo.url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| combo.url.clone());

    let state = match &combo.image_url {
        Some(img) => thumbs.get(ctx, img),
        None => Thumb::Failed,
    };

    match state {
        Thumb::Ready(tex) => {
            let resp = ui
                .add(egui::Image::new(&tex).max_size(Vec2::splat(px)).sense(Sense::click()))
                .on_hover_text(detail.as_str());
            if resp.clicked() {
                ctx.open_url(OpenUrl::new_tab(&detail));
            }
        }
        Thumb::Pending => {
            ui.add_sized([px, px], Spinner::new());
        }
        Thumb::Failed => {
            ui.hyperlink_to("open", &detail);
        }
    }
}
