// stocklist-core/tests/memory_store.rs
// ============================================================================
// Module: In-Memory Store Tests
// Description: Conformance tests for the in-memory item store.
// Purpose: Ensure the test backend matches the durable store's semantics.
// Dependencies: stocklist-core
// ============================================================================

//! ## Overview
//! Conformance tests for the in-memory [`ItemStore`] backend: round-trips,
//! missing-row no-ops, and ordering under every sort specification. The
//! durable backend runs the same scenarios in its own crate; the two suites
//! must agree on every observable outcome.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use stocklist_core::InMemoryItemStore;
use stocklist_core::ItemId;
use stocklist_core::ItemStore;
use stocklist_core::SortSpec;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn names(store: &InMemoryItemStore, sort: SortSpec) -> Vec<String> {
    store.list(sort).unwrap().into_iter().map(|item| item.name).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn insert_then_list_round_trips() {
    let store = InMemoryItemStore::new();
    store.insert("Pen", 5).unwrap();
    let items = store.list(SortSpec::NameAz).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pen");
    assert_eq!(items[0].quantity, 5);
}

#[test]
fn inserted_ids_are_unique_and_increasing() {
    let store = InMemoryItemStore::new();
    store.insert("A", 1).unwrap();
    store.insert("B", 2).unwrap();
    store.insert("C", 3).unwrap();
    let items = store.list(SortSpec::NameAz).unwrap();
    let ids: Vec<i64> = items.iter().map(|item| item.id.as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn initialize_is_idempotent() {
    let store = InMemoryItemStore::new();
    store.initialize().unwrap();
    store.insert("Pen", 5).unwrap();
    store.initialize().unwrap();
    store.initialize().unwrap();
    let items = store.list(SortSpec::NameAz).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pen");
}

#[test]
fn update_of_missing_id_is_a_no_op() {
    let store = InMemoryItemStore::new();
    store.insert("Pen", 5).unwrap();
    let before = store.list(SortSpec::NameAz).unwrap();
    let matched = store.update(ItemId::new(999), "Ghost", 1).unwrap();
    assert!(!matched);
    let after = store.list(SortSpec::NameAz).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_of_missing_id_is_a_no_op() {
    let store = InMemoryItemStore::new();
    store.insert("Pen", 5).unwrap();
    let before = store.list(SortSpec::NameAz).unwrap();
    let matched = store.delete(ItemId::new(999)).unwrap();
    assert!(!matched);
    let after = store.list(SortSpec::NameAz).unwrap();
    assert_eq!(before, after);
}

#[test]
fn update_replaces_name_and_quantity_in_place() {
    let store = InMemoryItemStore::new();
    store.insert("A", 1).unwrap();
    let id = store.list(SortSpec::NameAz).unwrap()[0].id;
    let matched = store.update(id, "B", 2).unwrap();
    assert!(matched);
    let items = store.list(SortSpec::NameAz).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].name, "B");
    assert_eq!(items[0].quantity, 2);
}

#[test]
fn delete_empties_the_list_under_every_sort() {
    let store = InMemoryItemStore::new();
    store.insert("X", 1).unwrap();
    let id = store.list(SortSpec::NameAz).unwrap()[0].id;
    assert!(store.delete(id).unwrap());
    for sort in SortSpec::all() {
        assert!(store.list(sort).unwrap().is_empty());
    }
}

#[test]
fn qty_then_name_ordering_uses_binary_collation() {
    let store = InMemoryItemStore::new();
    store.insert("Banana", 3).unwrap();
    store.insert("apple", 10).unwrap();
    store.insert("Cherry", 3).unwrap();
    // Uppercase sorts before lowercase byte-wise, so the quantity-3 group
    // comes out Banana, Cherry before the quantity-10 apple.
    assert_eq!(names(&store, SortSpec::QtyLhNameAz), vec!["Banana", "Cherry", "apple"]);
}

#[test]
fn quantity_ascending_orders_low_to_high() {
    let store = InMemoryItemStore::new();
    store.insert("Pen", 5).unwrap();
    store.insert("Cup", 2).unwrap();
    assert_eq!(names(&store, SortSpec::QtyLh), vec!["Cup", "Pen"]);
}

#[test]
fn name_descending_reverses_name_ascending() {
    let store = InMemoryItemStore::new();
    store.insert("Pen", 5).unwrap();
    store.insert("Cup", 2).unwrap();
    store.insert("Jar", 9).unwrap();
    let mut ascending = names(&store, SortSpec::NameAz);
    ascending.reverse();
    assert_eq!(names(&store, SortSpec::NameZa), ascending);
}

#[test]
fn qty_descending_with_name_tiebreak_reverses_groups() {
    let store = InMemoryItemStore::new();
    store.insert("Banana", 3).unwrap();
    store.insert("apple", 10).unwrap();
    store.insert("Cherry", 3).unwrap();
    assert_eq!(names(&store, SortSpec::QtyHlNameZa), vec!["apple", "Cherry", "Banana"]);
}

#[test]
fn clones_share_state() {
    let store = InMemoryItemStore::new();
    let other = store.clone();
    store.insert("Pen", 5).unwrap();
    let items = other.list(SortSpec::NameAz).unwrap();
    assert_eq!(items.len(), 1);
}
