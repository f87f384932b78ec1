// src/gui/pages/extract.rs
use eframe::egui::{self, RichText};

use crate::config::options::{ExtractMode, PageKind};
use crate::gui::{actions, app::App, components::data_table};

use super::Page;

pub struct ExtractPage;

pub static PAGE: ExtractPage = ExtractPage;

impl Page for ExtractPage {
    fn label(&self) -> &'static str { "Extract" }
    fn title(&self) -> &'static str { "Product Review Extractor" }
    fn kind(&self) -> PageKind { PageKind::Extract }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Enter a product review page link to extract customer reviews.");
        ui.label(RichText::new(
            "Review pages change their structure often, which may affect extraction. \
             You may need to click Extract more than once.").weak());

        // --- Mode ---
        ui.horizontal(|ui| {
            ui.label("Alignment:");
            let mode = &mut app.state.options.extract.mode;
            let before = *mode;
            for m in [ExtractMode::Flat, ExtractMode::Grouped] {
                ui.radio_value(mode, m, m.label());
            }
            if *mode != before {
                logf!("UI: Extract mode → {:?}", mode);
            }
        });

        // --- First page ---
        let mut extract_clicked = false;
        ui.horizontal(|ui| {
            ui.label("Link:");
            ui.add(egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("https://…/product-reviews/…")
                .desired_width(520.0));
            let ready = !app.state.gui.url_text.trim().is_empty();
            extract_clicked = ui.add_enabled(ready, egui::Button::new("Extract")).clicked();
        });

        // --- Next page ---
        let mut add_clicked = false;
        ui.horizontal(|ui| {
            ui.label("Next page:");
            ui.add(egui::TextEdit::singleline(&mut app.state.gui.next_url_text)
                .hint_text("link to the next page of reviews")
                .desired_width(520.0));
            let ready = !app.state.gui.next_url_text.trim().is_empty();
            add_clicked = ui.add_enabled(ready, egui::Button::new("Add Extra Data")).clicked();
        });

        // --- Session controls ---
        let mut reset_clicked = false;
        let mut export_clicked = false;
        ui.horizontal(|ui| {
            reset_clicked = ui.button("Reset Data").clicked();
            ui.separator();
            ui.label("Output folder:");
            if ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(200.0))
                .changed()
            {
                let text = app.state.gui.out_dir_text.clone();
                app.state.options.export.set_dir(&text);
            }
            export_clicked = ui.button("Download as CSV").clicked();
        });

        if extract_clicked {
            let url = app.state.gui.url_text.trim().to_string();
            actions::extract(app, &url, "Reviews extracted successfully!");
        }
        if add_clicked {
            let url = app.state.gui.next_url_text.trim().to_string();
            actions::extract(app, &url, "Next page reviews added successfully!");
        }
        if reset_clicked {
            actions::reset(app);
        }
        if export_clicked {
            actions::export_session(app);
        }

        ui.separator();
        ui.label(format!(
            "{} row(s) from {} extraction(s)",
            app.session.len(),
            app.session.batches()
        ));
        let h = ui.available_height();
        data_table::draw(ui, "session", app.session.table(), h);
    }
}
