// src/gui/components/data_table.rs
//
// Draws the summary table. Purely a view over `app.table`.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::table::{COLUMN_WIDTHS, NON_NUMERIC_COLUMNS};

use super::leader_color;

const ROW_HEIGHT: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    let cols = table.ncols();

    // Reserve space for the scroll bar instead of drawing over the last column
    ui.style_mut().spacing.scroll.floating = false;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let w = COLUMN_WIDTHS.get(ci).copied().unwrap_or(100.0);
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    let numeric: Vec<bool> = (0..cols).map(|ci| !NON_NUMERIC_COLUMNS.contains(&ci)).collect();

    builder
        .header(24.0, |mut header| {
            for (ci, h) in table.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if numeric[ci] {
                        ui.centered_and_justified(|ui| {
                            ui.add(label);
                        });
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.nrows(), |mut row| {
                let Some(r) = table.rows.get(row.index()) else { return };
                let fill = r.highlight.and_then(leader_color);

                for (ci, cell) in r.cells.iter().enumerate() {
                    row.col(|ui| {
                        let mut text = RichText::new(cell);
                        if let Some(color) = fill {
                            ui.painter().rect_filled(ui.max_rect(), 0.0, color);
                            text = text.color(Color32::BLACK);
                        }
                        if numeric[ci] {
                            ui.centered_and_justified(|ui| {
                                ui.label(text);
                            });
                        } else {
                            ui.label(text);
                        }
                    });
                }
            });
        });
}
