// src/gui/pages/analysis.rs
use eframe::egui::{self, RichText};

use crate::config::{options::PageKind, state::InputSource};
use crate::gui::{actions, app::App, components::data_table};

use super::Page;

pub struct AnalysisPage;

pub static PAGE: AnalysisPage = AnalysisPage;

impl Page for AnalysisPage {
    fn label(&self) -> &'static str { "Analysis" }
    fn title(&self) -> &'static str { "Review Analysis" }
    fn kind(&self) -> PageKind { PageKind::Analysis }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Use extracted reviews, a CSV file, or a shared sheet link.");

        ui.horizontal(|ui| {
            ui.label("Input:");
            let before = app.state.gui.input_source;
            for src in InputSource::ALL {
                ui.selectable_value(&mut app.state.gui.input_source, src, src.label());
            }
            if app.state.gui.input_source != before {
                logf!("UI: Input source → {:?}", app.state.gui.input_source);
            }
        });

        let mut load_clicked = false;
        match app.state.gui.input_source {
            InputSource::Session => {}
            InputSource::CsvFile => {
                ui.horizontal(|ui| {
                    ui.label("CSV path:");
                    ui.add(egui::TextEdit::singleline(&mut app.state.gui.csv_path_text)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(420.0));
                    load_clicked = ui.button("Load").clicked();
                });
            }
            InputSource::SheetLink => {
                ui.label(RichText::new(
                    "Make sure the sheet is shared publicly; share links are converted to CSV export links.").weak());
                ui.horizontal(|ui| {
                    ui.label("Sheet link:");
                    ui.add(egui::TextEdit::singleline(&mut app.state.gui.sheet_link_text)
                        .desired_width(420.0));
                    load_clicked = ui.button("Load").clicked();
                });
            }
        }
        if load_clicked {
            actions::load_input(app);
        }

        let Some(headers) = actions::analysis_input(app).map(|d| d.headers.clone()) else {
            ui.label(RichText::new("No data available. Extract reviews, or load a file or sheet link.").weak());
            return;
        };

        // --- Column + Analyze ---
        let mut analyze_clicked = false;
        ui.horizontal(|ui| {
            let selected = app.state.options.analysis.column.clone()
                .filter(|c| headers.contains(c));
            let mut choice = selected.clone();
            egui::ComboBox::from_label("Column to analyze")
                .selected_text(choice.as_deref().unwrap_or("choose…"))
                .show_ui(ui, |ui| {
                    for h in &headers {
                        ui.selectable_value(&mut choice, Some(h.clone()), h);
                    }
                });
            if choice != selected {
                logf!("UI: Analysis column → {:?}", choice);
            }
            app.state.options.analysis.column = choice;

            let ready = app.state.options.analysis.column.is_some();
            analyze_clicked = ui.add_enabled(ready, egui::Button::new("Analyze")).clicked();
        });

        if analyze_clicked {
            actions::analyze(app);
        }

        ui.separator();
        let h = ui.available_height();
        match (&app.results, actions::analysis_input(app)) {
            (Some(results), _) => {
                ui.label("Sentiment Analysis Results:");
                data_table::draw(ui, "analysis_results", results, h);
            }
            (None, Some(ds)) => {
                ui.label(format!("Loaded data: {} row(s)", ds.row_count()));
                data_table::draw(ui, "analysis_input", ds, h);
            }
            (None, None) => {}
        }
    }
}
