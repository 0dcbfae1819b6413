// src/gui/actions/copy.rs
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::consts::COPY_ACK_MS;
use crate::gui::app::App;

/// Copy affordance next to a link. Shows a transient "Copied" label for
/// COPY_ACK_MS after a click, then falls back to "Copy".
pub fn copy_button(ui: &mut egui::Ui, app: &mut App, href: &str) {
    let acked = app
        .copied
        .get(href)
        .is_some_and(|t| t.elapsed() < Duration::from_millis(COPY_ACK_MS));

    let label = if acked { "Copied" } else { "Copy" };
    if ui.small_button(label).clicked() && !acked {
        copy_link(app, ui.ctx(), href);
    }

    if acked {
        // Keep repainting so the ack expires without further input.
        ui.ctx().request_repaint();
    }
}

/// Clipboard write, fire-and-forget. Nothing downstream waits on it and a
/// denied clipboard only means the ack never shows.
pub fn copy_link(app: &mut App, ctx: &egui::Context, href: &str) {
    ctx.copy_text(s!(href));
    app.copied.insert(s!(href), Instant::now());
    app.status("Copied to clipboard");
    logf!("Copy: {}", href);
}
