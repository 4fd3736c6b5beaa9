//! Integration tests for file-backed wishlist persistence.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use tempfile::TempDir;
use toybasket_integration_tests::{bare_product, tiered_product};
use toybasket_store::storage::{JsonFileStorage, StorageBackend, keys};
use toybasket_store::wishlist::WishlistStore;

fn file_storage(dir: &TempDir) -> Arc<JsonFileStorage> {
    Arc::new(JsonFileStorage::new(dir.path()).unwrap())
}

#[test]
fn wishlist_round_trips_across_store_instances() {
    let dir = TempDir::new().unwrap();

    let mut wishlist = WishlistStore::load(file_storage(&dir));
    wishlist.add(&tiered_product("p1"));
    wishlist.add(&bare_product("p2", 60));
    let original: Vec<_> = wishlist.entries().to_vec();
    drop(wishlist);

    let rehydrated = WishlistStore::load(file_storage(&dir));
    assert_eq!(rehydrated.entries(), original.as_slice());
    assert_eq!(rehydrated.count(), 2);
}

#[test]
fn duplicate_add_is_not_persisted_twice() {
    let dir = TempDir::new().unwrap();

    let mut wishlist = WishlistStore::load(file_storage(&dir));
    let p = tiered_product("p1");
    wishlist.add(&p);
    wishlist.add(&p);
    drop(wishlist);

    let rehydrated = WishlistStore::load(file_storage(&dir));
    assert_eq!(rehydrated.count(), 1);
}

#[test]
fn toggle_off_removes_from_snapshot() {
    let dir = TempDir::new().unwrap();

    let mut wishlist = WishlistStore::load(file_storage(&dir));
    let p = tiered_product("p1");
    assert!(wishlist.toggle(&p));
    assert!(!wishlist.toggle(&p));
    drop(wishlist);

    let rehydrated = WishlistStore::load(file_storage(&dir));
    assert!(rehydrated.is_empty());
}

#[test]
fn malformed_snapshot_degrades_to_empty_wishlist() {
    let dir = TempDir::new().unwrap();
    let storage = file_storage(&dir);
    storage.set(keys::WISHLIST, "[[[").unwrap();

    let wishlist = WishlistStore::load(storage);
    assert!(wishlist.is_empty());
}
