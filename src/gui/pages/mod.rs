// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod explore;
pub mod statistics;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Shown instead of the body while no corpus is loaded.
    fn placeholder(&self) -> &'static str {
        "Open a corpus CSV (path field or drag and drop) to begin."
    }
}
