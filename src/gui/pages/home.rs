// src/gui/pages/home.rs
use eframe::egui::{self, Color32, RichText};

use crate::config::options::PageKind;
use crate::gui::app::App;

use super::Page;

pub struct HomePage;

pub static PAGE: HomePage = HomePage;

const STEPS: [(&str, &str, PageKind); 3] = [
    ("1. Extract Reviews", "Enter a product review page link to collect customer feedback.", PageKind::Extract),
    ("2. Analyze Sentiment", "Label each review as Positive, Neutral or Negative.", PageKind::Analysis),
    ("3. Visualize Results", "Chart the labels: share per label, or against any column.", PageKind::Visualize),
];

impl Page for HomePage {
    fn label(&self) -> &'static str { "Home" }
    fn title(&self) -> &'static str { "Product Review Analysis Tool" }
    fn kind(&self) -> PageKind { PageKind::Home }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label(
            RichText::new("Scores review text with the VADER lexicon and charts the results.")
                .size(16.0)
                .color(Color32::from_rgb(0xFF, 0xA5, 0x00)),
        );
        ui.add_space(12.0);
        ui.strong("How it works:");

        let mut target = None;
        for (step, blurb, kind) in STEPS {
            ui.horizontal(|ui| {
                if ui.link(RichText::new(step).strong()).clicked() {
                    target = Some(kind);
                }
                ui.label(blurb);
            });
        }

        ui.add_space(12.0);
        ui.label(
            RichText::new("Review pages change their markup often. If a page yields few or no \
                           reviews, try again or switch to grouped extraction.")
                .weak(),
        );

        if let Some(kind) = target {
            app.go_to(kind);
        }
    }
}
