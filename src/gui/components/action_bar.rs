// src/gui/components/action_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Refresh Data").clicked() {
            actions::refresh(app);
        }

        ui.label(app.status_text());
    });
}
