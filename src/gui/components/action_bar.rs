// src/gui/components/action_bar.rs
use eframe::egui::{self, Button, DragValue};

use crate::config::consts::DEFAULT_GLAZE_LIMIT;
use crate::config::options::GlazeSelector;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        let idle = !app.running;

        if ui.add_enabled(idle, Button::new("Scrape")).clicked() {
            actions::scrape(app, &ctx);
        }
        if ui.add_enabled(idle, Button::new("Reload")).clicked() {
            actions::reload(app);
        }

        ui.separator();
        limit_controls(ui, app, idle);
        ui.separator();

        if app.running {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}

/// Dropdown glaze limit; hidden when the scrape options name glazes explicitly.
fn limit_controls(ui: &mut egui::Ui, app: &mut App, idle: bool) {
    let GlazeSelector::Dropdown { limit } = &mut app.state.scrape.glazes else { return };

    let mut all = limit.is_none();
    let mut n = limit.unwrap_or(DEFAULT_GLAZE_LIMIT);

    ui.add_enabled(idle && !all, DragValue::new(&mut n).range(1..=1000).prefix("glazes: "));
    ui.add_enabled(idle, egui::Checkbox::new(&mut all, "all"));

    *limit = if all { None } else { Some(n) };
}
