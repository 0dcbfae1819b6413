// src/cart.rs
//
// Cart for the market page. One JSON file holds the ordered list of line
// items; every mutation is a read-modify-write of the whole list. Adds
// append a new line even for a repeated item (no merging by name). Single
// instance assumed, no schema versioning.

use std::{error::Error, fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::{CART_FILE, STORE_DIR};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub qty: u32,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Cart {
    path: PathBuf,
}

impl Cart {
    /// Cart stored under the app's local state dir.
    pub fn default_location() -> Self {
        Self { path: PathBuf::from(STORE_DIR).join(CART_FILE) }
    }

    pub fn at(dir: &std::path::Path) -> Self {
        Self { path: dir.join(CART_FILE) }
    }

    /// Current line items. A missing or unreadable file is an empty cart.
    pub fn items(&self) -> Vec<CartItem> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&text) {
            Ok(items) => items,
            Err(e) => {
                loge!("Cart: {} did not parse ({}), treating as empty", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Append one line item and persist.
    pub fn add(
        &self,
        name: &str,
        price: f64,
        qty: u32,
        img: Option<&str>,
    ) -> Result<Vec<CartItem>, Box<dyn Error>> {
        let mut items = self.items();
        items.push(CartItem {
            name: s!(name),
            price,
            qty,
            total: price * qty as f64,
            img: img.map(String::from),
        });
        self.save(&items)?;
        logf!("Cart: Added {} x{} (lines={})", name, qty, items.len());
        Ok(items)
    }

    /// Remove the line at `index` (no-op when out of range) and persist.
    pub fn remove(&self, index: usize) -> Result<Vec<CartItem>, Box<dyn Error>> {
        let mut items = self.items();
        if index < items.len() {
            let gone = items.remove(index);
            self.save(&items)?;
            logf!("Cart: Removed {} (lines={})", gone.name, items.len());
        }
        Ok(items)
    }

    pub fn clear(&self) -> Result<(), Box<dyn Error>> {
        self.save(&[])?;
        logf!("Cart: Cleared");
        Ok(())
    }

    fn save(&self, items: &[CartItem]) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string(items)?)?;
        Ok(())
    }
}

/// Badge number: sum of line quantities.
pub fn total_qty(items: &[CartItem]) -> u32 {
    items.iter().map(|i| i.qty).sum()
}

pub fn grand_total(items: &[CartItem]) -> f64 {
    items.iter().map(|i| i.total).sum()
}
