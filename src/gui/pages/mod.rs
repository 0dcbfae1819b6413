// src/gui/pages/mod.rs
use eframe::egui;

use crate::gui::app::App;

pub mod directory;
pub mod market;

pub use directory::{DirectoryPage, ResultsLayout};

/// One tab. Pages are static singletons; all mutable state lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Draw the whole page body (below the tab strip).
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
