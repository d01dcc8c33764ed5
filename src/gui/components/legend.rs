// src/gui/components/legend.rs
use eframe::egui::{self, Color32, RichText};

use crate::data::Stat;

use super::leader_color;

pub fn draw(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Key:").strong());
        for stat in Stat::LEADERS {
            let Some(fill) = leader_color(stat) else { continue };
            ui.label(
                RichText::new(format!(" {} ", stat.leader_label()))
                    .background_color(fill)
                    .color(Color32::BLACK),
            );
        }
    });
}
