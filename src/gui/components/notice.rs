// src/gui/components/notice.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::{Notice, NoticeLevel};

fn color(level: NoticeLevel) -> Color32 {
    match level {
        NoticeLevel::Info => Color32::from_rgb(0x64, 0xB4, 0xFF),
        NoticeLevel::Success => Color32::from_rgb(0x3C, 0xB4, 0x4B),
        NoticeLevel::Warning => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        NoticeLevel::Error => Color32::from_rgb(0xDC, 0x61, 0x49),
    }
}

pub fn draw(ui: &mut egui::Ui, notices: &[Notice]) {
    if notices.is_empty() { return; }
    for n in notices {
        ui.label(RichText::new(&n.text).color(color(n.level)));
    }
    ui.separator();
}
