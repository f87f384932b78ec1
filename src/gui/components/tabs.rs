// src/gui/components/tabs.rs
//
// Navigation bar: one selectable label per page. Switching goes through
// App::go_to so the new page's on_enter runs.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut target = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                target = Some(page.kind());
            }
        }
    });

    if let Some(kind) = target {
        app.go_to(kind);
    }
}
