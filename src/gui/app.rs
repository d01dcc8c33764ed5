// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    runner::Session,
    table::TableData,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            // Highlight colors are pastel and need a light background
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // fingerprint + name lookup, kept between refreshes
    pub session: Session,

    // what the table currently shows
    pub table: TableData,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // one-shot message shown in a small window
    pub notice: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let session = Session::from_options(state.options.clone());
        logf!(
            "Init: data={} match column={}",
            state.options.data_path.display(),
            state.options.layout.match_id
        );

        Self {
            state,
            session,
            table: TableData::empty(),
            status: Arc::new(Mutex::new(s!("Press Refresh Data to load the sheet"))),
            notice: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.gui.show_legend {
            egui::TopBottomPanel::bottom("legend").show(ctx, |ui| {
                components::legend::draw(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });

        if let Some(msg) = self.notice.clone() {
            let mut open = true;
            let mut dismissed = false;
            egui::Window::new("Info")
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(msg);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            if dismissed || !open {
                self.notice = None;
            }
        }
    }
}
