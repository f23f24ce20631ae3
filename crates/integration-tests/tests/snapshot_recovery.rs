//! Integration tests for snapshot corruption and storage-failure recovery.

#![allow(clippy::unwrap_used)]

use bazaar_cart::{CartStore, JsonFileStore, SaveOutcome, SnapshotStore};
use bazaar_core::Price;
use bazaar_integration_tests::catalog_product;

#[test]
fn corrupt_snapshot_yields_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "{definitely not a cart").unwrap();

    let store = CartStore::hydrate(Box::new(JsonFileStore::new(path)));
    assert!(store.state().is_empty());
    assert_eq!(store.total(), Price::ZERO);
}

#[test]
fn structurally_wrong_snapshot_yields_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    // valid JSON, wrong shape: an object where the line array belongs
    std::fs::write(&path, r#"{"state": {"items": []}, "version": 0}"#).unwrap();

    let store = CartStore::hydrate(Box::new(JsonFileStore::new(path)));
    assert!(store.state().is_empty());
}

#[test]
fn invalid_snapshot_is_replaced_on_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut store = CartStore::hydrate(Box::new(JsonFileStore::new(&path)));
    let outcome = store.add_to_cart(catalog_product("widget-1", "Widget", 1999, 5));
    assert_eq!(outcome, SaveOutcome::Durable);

    // the corrupt file is gone; the snapshot reads back clean
    let restored = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(restored.total_items(), 1);
}

#[test]
fn unwritable_path_degrades_to_memory_only() {
    let dir = tempfile::tempdir().unwrap();
    // a path whose parent is a file, so directory creation fails
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("cart.json");

    let mut store = CartStore::hydrate(Box::new(JsonFileStore::new(path)));
    let outcome = store.add_to_cart(catalog_product("widget-1", "Widget", 1999, 5));

    // durability is lost, the mutation is not
    assert_eq!(outcome, SaveOutcome::MemoryOnly);
    assert_eq!(store.total_items(), 1);
}

#[test]
fn snapshot_written_by_one_store_hydrates_another() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let writer = JsonFileStore::new(&path);
    let mut store = CartStore::hydrate(Box::new(writer));
    store.add_to_cart(catalog_product("widget-1", "Widget", 1999, 5));
    store.update_quantity(&bazaar_core::ProductId::new("widget-1"), 2);

    let reader = JsonFileStore::new(&path);
    let restored = reader.load().unwrap().unwrap();
    assert_eq!(restored, *store.state());
}
