// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod analysis;
pub mod extract;
pub mod home;
pub mod visualize;

pub trait Page: Send + Sync + 'static {
    /// Navigation label.
    fn label(&self) -> &'static str;

    /// Heading above the page body.
    fn title(&self) -> &'static str { self.label() }

    fn kind(&self) -> PageKind;

    /// Draw the page body. Button handlers run synchronously inside this call.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the page becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
