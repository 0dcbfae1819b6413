// src/gui/components/results_area.rs
//
// Draws the results for a directory page from the prebuilt ResultsView.
// Purely a view: no filtering happens here. Regions get the two-column
// link table with copy buttons and the footer note; the other pages get
// the simple card list.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::actions;
use crate::gui::app::App;
use crate::gui::pages::{DirectoryPage, ResultsLayout};
use crate::render::{EntryView, ResultsView, NO_LINK_MSG, NO_RESULTS_MSG, RESULTS_FOOTER};

pub fn draw(ui: &mut egui::Ui, app: &mut App, page: &DirectoryPage) {
    if let Some(msg) = app.result_errors.get(&page.kind) {
        ui.colored_label(egui::Color32::from_rgb(220, 30, 30), msg);
        return;
    }

    // Nothing until the last facet is bound.
    let Some(view) = app.results.get(&page.kind).cloned() else { return };

    if view.is_empty() {
        ui.label(NO_RESULTS_MSG);
        return;
    }

    ui.heading(format!("Showing {} Employers", view.count));
    for (label, value) in &view.summary {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{label}:")).strong());
            ui.label(value);
        });
    }
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("results_scroll")
        .show(ui, |ui| match page.layout {
            ResultsLayout::LinkTable => {
                link_table(ui, app, &view);
                ui.add_space(8.0);
                ui.label(RichText::new(RESULTS_FOOTER).italics());
            }
            ResultsLayout::Cards => cards(ui, app, &view),
        });
}

fn link_table(ui: &mut egui::Ui, app: &mut App, view: &ResultsView) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(220.0))
        .column(Column::remainder().at_least(220.0))
        .header(24.0, |mut header| {
            header.col(|ui| { ui.label(RichText::new("Employer Contact").strong()); });
            header.col(|ui| { ui.label(RichText::new("Employer Careers Page").strong()); });
        })
        .body(|mut body| {
            for entry in &view.entries {
                body.row(22.0, |mut row| {
                    row.col(|ui| link_cell(ui, app, entry.contact.as_ref()));
                    row.col(|ui| link_cell(ui, app, entry.careers.as_ref()));
                });
            }
        });
}

fn link_cell(ui: &mut egui::Ui, app: &mut App, link: Option<&crate::render::LinkView>) {
    match link {
        Some(link) => {
            ui.horizontal(|ui| {
                ui.hyperlink_to(&link.label, &link.href);
                actions::copy_button(ui, app, &link.href);
            });
        }
        None => {
            ui.label(NO_LINK_MSG);
        }
    }
}

fn cards(ui: &mut egui::Ui, app: &mut App, view: &ResultsView) {
    for entry in &view.entries {
        ui.group(|ui| card(ui, app, entry));
    }
}

fn card(ui: &mut egui::Ui, app: &mut App, entry: &EntryView) {
    ui.horizontal(|ui| {
        match &entry.href {
            Some(href) => {
                ui.hyperlink_to(RichText::new(&entry.name).strong(), href);
                actions::copy_button(ui, app, href);
            }
            None => {
                ui.label(RichText::new(&entry.name).strong());
            }
        }
    });
}
