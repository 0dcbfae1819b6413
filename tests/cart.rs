// tests/cart.rs
//
// Cart persistence: read-modify-write of the single JSON file, append-only
// line semantics, totals.
//
use std::fs;

use jobdex::cart::{self, Cart};

#[test]
fn add_appends_lines_without_merging() {
    let dir = tempfile::tempdir().unwrap();
    let cart = Cart::at(dir.path());

    cart.add("Classic Tee", 18.0, 2, None).unwrap();
    cart.add("Logo Sticker Pack", 6.5, 1, Some("img/sticker_pack.jpg")).unwrap();
    // Same item again: a new line, not qty 3 on the first.
    let items = cart.add("Classic Tee", 18.0, 1, None).unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].total, 36.0);
    assert_eq!(items[1].img.as_deref(), Some("img/sticker_pack.jpg"));
    assert_eq!(cart::total_qty(&items), 4);
    assert_eq!(cart::grand_total(&items), 36.0 + 6.5 + 18.0);
}

#[test]
fn mutations_round_trip_through_the_file() {
    let dir = tempfile::tempdir().unwrap();

    Cart::at(dir.path()).add("Canvas Tote", 16.0, 1, None).unwrap();

    // A second handle sees the persisted state (read-modify-write, no
    // in-memory authority).
    let other = Cart::at(dir.path());
    let items = other.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Canvas Tote");

    let items = other.remove(0).unwrap();
    assert!(items.is_empty());
    assert!(Cart::at(dir.path()).items().is_empty());
}

#[test]
fn remove_out_of_range_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let cart = Cart::at(dir.path());
    cart.add("Trail Hoodie", 42.0, 1, None).unwrap();

    let items = cart.remove(5).unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn missing_or_corrupt_file_is_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let cart = Cart::at(dir.path());
    assert!(cart.items().is_empty());

    fs::write(dir.path().join("cart.json"), "not json at all").unwrap();
    assert!(cart.items().is_empty());

    // And the cart recovers on the next write.
    let items = cart.add("Classic Tee", 18.0, 1, None).unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn clear_empties_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let cart = Cart::at(dir.path());
    cart.add("Classic Tee", 18.0, 1, None).unwrap();
    cart.clear().unwrap();
    assert!(cart.items().is_empty());
}
