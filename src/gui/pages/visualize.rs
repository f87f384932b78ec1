// src/gui/pages/visualize.rs
use eframe::egui;

use crate::config::{consts::SENTIMENT_COLUMN, options::PageKind};
use crate::gui::{actions, app::App, components::charts};
use crate::viz::{self, ChartKind};

use super::Page;

pub struct VisualizePage;

pub static PAGE: VisualizePage = VisualizePage;

impl Page for VisualizePage {
    fn label(&self) -> &'static str { "Visualize" }
    fn title(&self) -> &'static str { "Data Visualization" }
    fn kind(&self) -> PageKind { PageKind::Visualize }

    fn on_enter(&self, app: &mut App) {
        actions::load_results(app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(results) = app.results.as_ref() else {
            if ui.button("Reload results").clicked() {
                app.clear_notices();
                actions::load_results(app);
            }
            return;
        };

        // --- Chart controls ---
        let gui = &mut app.state.gui;
        ui.horizontal(|ui| {
            let before = gui.chart;
            egui::ComboBox::from_label("Chart")
                .selected_text(gui.chart.label())
                .show_ui(ui, |ui| {
                    for k in ChartKind::ALL {
                        ui.selectable_value(&mut gui.chart, k, k.label());
                    }
                });
            if gui.chart != before {
                logf!("UI: Chart → {:?}", gui.chart);
            }

            if gui.chart.needs_column() {
                let columns: Vec<&String> = results.headers.iter()
                    .filter(|h| h.as_str() != SENTIMENT_COLUMN)
                    .collect();
                if gui.viz_column.as_ref().is_none_or(|c| results.column_index(c).is_none()) {
                    gui.viz_column = columns.first().map(|c| (*c).clone());
                }
                egui::ComboBox::from_label("Column")
                    .selected_text(gui.viz_column.as_deref().unwrap_or("none"))
                    .show_ui(ui, |ui| {
                        for h in columns {
                            ui.selectable_value(&mut gui.viz_column, Some(h.clone()), h);
                        }
                    });
            }
        });
        ui.separator();

        let drawn = match gui.chart {
            ChartKind::None => {
                ui.label("Choose a chart type.");
                Ok(())
            }
            ChartKind::Pie => viz::pie_breakdown(results).map(|b| charts::pie(ui, &b)),
            ChartKind::Histogram => match gui.viz_column.as_deref() {
                Some(col) => viz::histogram(results, col).map(|h| charts::histogram(ui, &h)),
                None => Ok(()),
            },
            ChartKind::Scatter => match gui.viz_column.as_deref() {
                Some(col) => viz::scatter(results, col).map(|s| charts::scatter(ui, &s)),
                None => Ok(()),
            },
        };

        if let Err(e) = drawn {
            logd!("Visualize: {:?} not drawn: {e}", gui.chart);
            ui.colored_label(ui.visuals().error_fg_color, format!("Cannot draw chart: {e}"));
        }
    }
}
