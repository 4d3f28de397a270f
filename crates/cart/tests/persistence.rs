//! Black-box persistence tests: a real file slot, the seed catalog, and two
//! store lifetimes simulating an app restart.

use shopfront_cart::{CartStore, FileSnapshotStore};
use shopfront_catalog::Catalog;
use shopfront_core::ProductId;

#[test]
fn cart_survives_a_restart_through_the_file_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let catalog = Catalog::seed();

    {
        let mut store = CartStore::new(Box::new(FileSnapshotStore::new(&path)));
        let headphones = catalog.product(ProductId::new(1)).unwrap().clone();
        let novel = catalog.product(ProductId::new(9)).unwrap().clone();

        store.add_to_cart(headphones.clone());
        store.add_to_cart(headphones);
        store.add_to_cart(novel);
        store.toggle_visibility();
    }

    let store = CartStore::new(Box::new(FileSnapshotStore::new(&path)));
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price(), 2 * 12999 + 1499);
    let ids: Vec<u32> = store
        .entries()
        .iter()
        .map(|e| e.product.id.value())
        .collect();
    assert_eq!(ids, vec![1, 9]);
    // Visibility is ephemeral: the panel reopens closed.
    assert!(!store.is_open());
}

#[test]
fn truncated_snapshot_file_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, r#"[{"product":{"id":1,"na"#).unwrap();

    let store = CartStore::new(Box::new(FileSnapshotStore::new(&path)));
    assert!(store.entries().is_empty());
}

#[test]
fn snapshot_file_holds_denormalized_product_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    let catalog = Catalog::seed();

    let mut store = CartStore::new(Box::new(FileSnapshotStore::new(&path)));
    store.add_to_cart(catalog.product(ProductId::new(3)).unwrap().clone());

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["quantity"], 1);
    assert_eq!(parsed[0]["product"]["name"], "Laptop");
    assert_eq!(parsed[0]["product"]["price"], 129999);
}
