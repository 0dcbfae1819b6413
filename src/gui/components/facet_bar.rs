// src/gui/components/facet_bar.rs
//
// One ComboBox per facet in the page's chain. A box is enabled only while
// it has a populated, non-empty option list (i.e. every upstream slot is
// bound and at least one record survives). Picking the placeholder row
// clears the slot. Exactly one pipeline invocation per user change; the
// change is collected during draw and applied after, outside the closures.

use eframe::egui;

use crate::gui::app::App;
use crate::gui::pages::DirectoryPage;

pub fn draw(ui: &mut egui::Ui, app: &mut App, page: &DirectoryPage) {
    let kind = page.kind;

    if let Some(msg) = app.load_errors.get(&kind).cloned() {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(220, 30, 30), &msg);
            if ui.button("Retry").clicked() {
                app.load_domain(kind, false);
            }
        });
        return;
    }

    // Snapshot; the real state is only touched through on_facet_change.
    let Some(sel) = app.selections.get(&kind).cloned() else { return };
    let opts_all = app.stage_options.get(&kind).cloned().unwrap_or_default();

    let mut change: Option<(usize, Option<String>)> = None;
    let mut refresh = false;

    ui.horizontal_wrapped(|ui| {
        for (i, facet) in page.chain.facets.iter().enumerate() {
            let options = opts_all.get(i);
            let enabled = options.is_some_and(|o| !o.is_empty());
            let current = sel.get(i);

            ui.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_id_salt((kind, i))
                    .selected_text(s!(current.unwrap_or(facet.placeholder)))
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(current.is_none(), facet.placeholder).clicked() {
                            change = Some((i, None));
                        }
                        if let Some(options) = options {
                            for value in options {
                                let picked = current == Some(value.as_str());
                                if ui.selectable_label(picked, value).clicked() {
                                    change = Some((i, Some(value.clone())));
                                }
                            }
                        }
                    });
            });
        }

        if ui.button("⟳ Refresh data").clicked() {
            refresh = true;
        }
    });

    if let Some((stage, value)) = change {
        // Re-picking the already-selected row is not a change event.
        if sel.get(stage) != value.as_deref() {
            app.on_facet_change(kind, stage, value);
        }
    }

    if refresh {
        logf!("UI: Refresh {:?}", kind);
        app.load_domain(kind, true);
    }
}
