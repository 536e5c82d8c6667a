// src/gui/components/glaze_panel.rs
//
// Left panel: search box with suggestions, then the picked glazes with
// remove buttons. Selection lives in app.state.gui.selected.

use eframe::egui::{self, Key, RichText, TextEdit};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Glazes");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected = app.catalog.glazes().to_vec();
            logd!("UI: Selected all {} glazes", app.state.gui.selected.len());
        }
        if ui.button("None").clicked() {
            app.state.gui.selected.clear();
        }
    });

    ui.separator();

    let resp = ui.add(
        TextEdit::singleline(&mut app.state.gui.query)
            .hint_text("Start typing a glaze...")
            .desired_width(f32::INFINITY),
    );
    let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    let suggestions: Vec<String> = app
        .catalog
        .suggestions(&app.state.gui.query)
        .into_iter()
        .map(String::from)
        .collect();

    let mut picked: Option<String> = None;
    if enter {
        picked = suggestions.first().cloned();
    }
    if !suggestions.is_empty() {
        egui::ScrollArea::vertical()
            .id_salt("suggestions_scroll")
            .max_height(220.0)
            .show(ui, |ui| {
                for glaze in &suggestions {
                    if ui.selectable_label(false, glaze).clicked() {
                        picked = Some(glaze.clone());
                    }
                }
            });
    }
    if let Some(glaze) = picked {
        if app.state.gui.pick(&glaze) {
            logd!("UI: Picked {glaze}");
        }
        app.state.gui.query.clear();
    }

    ui.separator();
    ui.label(RichText::new("Selected glazes:").strong());

    let mut remove: Option<String> = None;
    egui::ScrollArea::vertical()
        .id_salt("selected_scroll")
        .show(ui, |ui| {
            for glaze in &app.state.gui.selected {
                ui.horizontal(|ui| {
                    if ui.small_button("x").clicked() {
                        remove = Some(glaze.clone());
                    }
                    ui.label(glaze);
                });
            }
        });
    if let Some(glaze) = remove {
        app.state.gui.unpick(&glaze);
        logd!("UI: Removed {glaze}");
    }
}
