// src/gui/components/mod.rs
use eframe::egui::Color32;

use crate::config::consts::{
    BEST_AUTO_SAMPLES_COLOR, BEST_AUTO_SPECIMENS_COLOR, BEST_TELEOP_SAMPLES_COLOR,
    BEST_TELEOP_SPECIMENS_COLOR,
};
use crate::data::Stat;

pub mod action_bar;
pub mod data_table;
pub mod legend;

/// Row fill for the team leading `stat`; `None` for stats without a leader.
pub fn leader_color(stat: Stat) -> Option<Color32> {
    let (r, g, b) = match stat {
        Stat::AutoSamples => BEST_AUTO_SAMPLES_COLOR,
        Stat::AutoSpecimens => BEST_AUTO_SPECIMENS_COLOR,
        Stat::TeleopSamples => BEST_TELEOP_SAMPLES_COLOR,
        Stat::TeleopSpecimens => BEST_TELEOP_SPECIMENS_COLOR,
        Stat::AutoPark | Stat::AscentLevel => return None,
    };
    Some(Color32::from_rgb(r, g, b))
}
