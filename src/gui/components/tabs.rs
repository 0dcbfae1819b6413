// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. The market tab
// carries the floating-cart badge (total quantity across line items).

use eframe::egui;

use crate::cart;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();
        let badge = cart::total_qty(&app.cart_items);

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            let label = if page.title() == "Market" && badge > 0 {
                format!("{} ({})", page.title(), badge)
            } else {
                s!(page.title())
            };

            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {} → {}", pages[cur].title(), page.title());
                app.set_current_index(idx);
            }
        }
    });
}
