// src/gui/pages/market.rs
//
// The small market page: a gallery of items with a category filter,
// batch-wise "Load more" paging, per-item quantity and add-to-cart, plus
// the cart itself (line list, totals, remove/clear). Cart mutations go
// through `cart::Cart`, which persists the full line list on every change.

use eframe::egui::{self, RichText};

use crate::cart;
use crate::config::consts::GALLERY_BATCH;
use crate::gui::app::App;

use super::Page;

struct MarketItem {
    name: &'static str,
    price: f64,
    category: &'static str,
    img: Option<&'static str>,
}

// Fixed catalog; the original site inlines its gallery the same way.
static ITEMS: &[MarketItem] = &[
    MarketItem { name: "Sunrise Harbor Print", price: 24.00, category: "prints", img: Some("img/sunrise_harbor.jpg") },
    MarketItem { name: "Redwood Trail Print", price: 24.00, category: "prints", img: Some("img/redwood_trail.jpg") },
    MarketItem { name: "City Lights Print", price: 28.00, category: "prints", img: Some("img/city_lights.jpg") },
    MarketItem { name: "Desert Bloom Print", price: 22.00, category: "prints", img: Some("img/desert_bloom.jpg") },
    MarketItem { name: "Coastline Panorama", price: 34.00, category: "prints", img: Some("img/coastline.jpg") },
    MarketItem { name: "Logo Sticker Pack", price: 6.50, category: "stickers", img: Some("img/sticker_pack.jpg") },
    MarketItem { name: "Wildflower Sticker Sheet", price: 5.00, category: "stickers", img: Some("img/wildflowers.jpg") },
    MarketItem { name: "Classic Tee", price: 18.00, category: "apparel", img: Some("img/classic_tee.jpg") },
    MarketItem { name: "Trail Hoodie", price: 42.00, category: "apparel", img: Some("img/trail_hoodie.jpg") },
    MarketItem { name: "Canvas Tote", price: 16.00, category: "apparel", img: Some("img/canvas_tote.jpg") },
];

pub struct MarketPage;
pub static PAGE: MarketPage = MarketPage;

impl Page for MarketPage {
    fn title(&self) -> &'static str { "Market" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_filter(ui, app);
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("market_scroll")
            .show(ui, |ui| {
                draw_gallery(ui, app);
                ui.separator();
                draw_cart(ui, app);
            });
    }
}

fn categories() -> Vec<&'static str> {
    let mut cats: Vec<&'static str> = Vec::new();
    for item in ITEMS {
        if !cats.contains(&item.category) {
            cats.push(item.category);
        }
    }
    cats
}

fn filtered(category: &str) -> Vec<&'static MarketItem> {
    ITEMS
        .iter()
        .filter(|i| category == "all" || i.category == category)
        .collect()
}

fn draw_filter(ui: &mut egui::Ui, app: &mut App) {
    let mut picked: Option<String> = None;
    let current = app.state.gui.market_category.clone();

    ui.horizontal(|ui| {
        ui.label("Category:");
        egui::ComboBox::from_id_salt("market_category")
            .selected_text(&current)
            .show_ui(ui, |ui| {
                if ui.selectable_label(current == "all", "all").clicked() {
                    picked = Some(s!("all"));
                }
                for cat in categories() {
                    if ui.selectable_label(current == cat, cat).clicked() {
                        picked = Some(s!(cat));
                    }
                }
            });
    });

    if let Some(cat) = picked {
        if cat != app.state.gui.market_category {
            // Filter change restarts the paging from the first batch.
            app.state.gui.market_category = cat;
            app.state.gui.market_shown = 0;
        }
    }
}

fn draw_gallery(ui: &mut egui::Ui, app: &mut App) {
    let items = filtered(&app.state.gui.market_category.clone());

    if app.state.gui.market_shown == 0 {
        app.state.gui.market_shown = GALLERY_BATCH.min(items.len());
    }
    let shown = app.state.gui.market_shown.min(items.len());

    let mut added: Option<(&'static MarketItem, u32)> = None;

    ui.horizontal_wrapped(|ui| {
        for &item in &items[..shown] {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(180.0);
                    ui.label(RichText::new(item.name).strong());
                    ui.label(format!("Price: ${:.2}", item.price));

                    let qty = app.market_qty.entry(item.name).or_insert(1);
                    ui.horizontal(|ui| {
                        ui.label("Quantity:");
                        ui.add(egui::DragValue::new(qty).range(1..=99));
                    });
                    let qty = *qty;

                    if ui.button("Add to Cart").clicked() {
                        added = Some((item, qty));
                    }
                });
            });
        }
    });

    if shown < items.len() && ui.button("Load more").clicked() {
        app.state.gui.market_shown = (shown + GALLERY_BATCH).min(items.len());
    }

    if let Some((item, qty)) = added {
        match app.cart.add(item.name, item.price, qty, item.img) {
            Ok(items) => {
                app.cart_items = items;
                app.status("Item added to cart!");
            }
            Err(e) => {
                loge!("Cart: Add failed: {}", e);
                app.status(format!("Cart error: {e}"));
            }
        }
    }
}

fn draw_cart(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("Cart ({})", cart::total_qty(&app.cart_items)));

    if app.cart_items.is_empty() {
        ui.label("Your cart is empty.");
        return;
    }

    let mut remove: Option<usize> = None;
    let mut clear = false;

    for (ix, line) in app.cart_items.iter().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("{} × {}", line.qty, line.name));
            ui.label(format!("${:.2}", line.total));
            if ui.small_button("Remove").clicked() {
                remove = Some(ix);
            }
        });
    }

    ui.label(RichText::new(format!("Total: ${:.2}", cart::grand_total(&app.cart_items))).strong());
    if ui.button("Clear cart").clicked() {
        clear = true;
    }

    if let Some(ix) = remove {
        match app.cart.remove(ix) {
            Ok(items) => app.cart_items = items,
            Err(e) => {
                loge!("Cart: Remove failed: {}", e);
                app.status(format!("Cart error: {e}"));
            }
        }
    }
    if clear {
        if let Err(e) = app.cart.clear() {
            loge!("Cart: Clear failed: {}", e);
            app.status(format!("Cart error: {e}"));
        }
        app.reload_cart();
    }
}
