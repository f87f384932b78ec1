// src/gui/components/data_table.rs
//
// Read-only table preview. Missing cells render as a dim <NA>; separator rows
// are drawn as-is.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::SENTIMENT_COLUMN;
use crate::sentiment::Sentiment;
use crate::store::DataSet;

const ROW_H: f32 = 20.0;

fn initial_width(header: &str) -> f32 {
    match header {
        "Long_Review" => 420.0,
        "Short_Review" => 220.0,
        "Name" | "Star_Rating" => 140.0,
        SENTIMENT_COLUMN => 90.0,
        _ => 120.0,
    }
}

fn label_color(cell: &str) -> Option<egui::Color32> {
    match cell.parse::<Sentiment>().ok()? {
        Sentiment::Positive => Some(egui::Color32::from_rgb(0x3C, 0xB4, 0x4B)),
        Sentiment::Neutral => None,
        Sentiment::Negative => Some(egui::Color32::from_rgb(0xDC, 0x61, 0x49)),
    }
}

/// Draw `ds` inside its own scroll area. `id` must be unique per page.
pub fn draw(ui: &mut egui::Ui, id: &str, ds: &DataSet, max_height: f32) {
    if ds.headers.is_empty() {
        ui.label(RichText::new("(no columns)").weak());
        return;
    }
    let cols = ds.headers.len();
    let sentiment_ix = ds.column_index(SENTIMENT_COLUMN);

    egui::ScrollArea::horizontal()
        .id_salt(("table_hscroll", id))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(("table", id))
                .striped(true)
                .max_scroll_height(max_height)
                .min_scrolled_height(0.0);
            for h in &ds.headers {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in &ds.headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, ds.row_count(), |mut row| {
                        let r = &ds.rows[row.index()];
                        for ci in 0..cols {
                            let cell = r.get(ci).and_then(|c| c.as_deref());
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    match cell {
                                        Some(text) => {
                                            let mut rt = RichText::new(text);
                                            if Some(ci) == sentiment_ix {
                                                if let Some(c) = label_color(text) { rt = rt.color(c); }
                                            }
                                            ui.label(rt).on_hover_text(text);
                                        }
                                        None => { ui.label(RichText::new("<NA>").weak()); }
                                    }
                                });
                            });
                        }
                    });
                });
        });
}
