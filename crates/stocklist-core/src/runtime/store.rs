// stocklist-core/src/runtime/store.rs
// ============================================================================
// Module: Stocklist In-Memory Store
// Description: Simple in-memory item store for tests and examples.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of [`ItemStore`]
//! for tests and local demos. It mirrors the durable backend's observable
//! semantics, including byte-wise name ordering, but is not intended for
//! production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::Item;
use crate::core::ItemId;
use crate::core::SortSpec;
use crate::interfaces::ItemStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Mutable state shared by clones of the in-memory store.
#[derive(Debug, Default)]
struct InMemoryState {
    /// Rows keyed by raw id.
    rows: BTreeMap<i64, Item>,
    /// Highest id assigned so far.
    last_id: i64,
}

/// In-memory item store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemStore {
    /// Row map and id counter protected by a mutex.
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryItemStore {
    /// Creates a new empty in-memory item store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState::default())),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn initialize(&self) -> Result<(), StoreError> {
        // Nothing to bootstrap: the map exists as soon as the store does.
        Ok(())
    }

    fn insert(&self, name: &str, quantity: i64) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Db("item store mutex poisoned".to_string()))?;
        let id = guard
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Db("item id counter overflow".to_string()))?;
        guard.last_id = id;
        guard.rows.insert(
            id,
            Item {
                id: ItemId::new(id),
                name: name.to_string(),
                quantity,
            },
        );
        drop(guard);
        Ok(())
    }

    fn update(&self, id: ItemId, name: &str, quantity: i64) -> Result<bool, StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Db("item store mutex poisoned".to_string()))?;
        let Some(row) = guard.rows.get_mut(&id.as_i64()) else {
            return Ok(false);
        };
        row.name = name.to_string();
        row.quantity = quantity;
        drop(guard);
        Ok(true)
    }

    fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Db("item store mutex poisoned".to_string()))?;
        let removed = guard.rows.remove(&id.as_i64()).is_some();
        drop(guard);
        Ok(removed)
    }

    fn list(&self, sort: SortSpec) -> Result<Vec<Item>, StoreError> {
        let guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Db("item store mutex poisoned".to_string()))?;
        let mut items: Vec<Item> = guard.rows.values().cloned().collect();
        drop(guard);
        items.sort_by(|a, b| sort.compare(a, b));
        Ok(items)
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared item store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedItemStore {
    /// Inner store implementation.
    inner: Arc<dyn ItemStore + Send + Sync>,
}

impl SharedItemStore {
    /// Wraps an item store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl ItemStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Wraps an existing shared store.
    #[must_use]
    pub const fn new(store: Arc<dyn ItemStore + Send + Sync>) -> Self {
        Self {
            inner: store,
        }
    }
}

impl ItemStore for SharedItemStore {
    fn initialize(&self) -> Result<(), StoreError> {
        self.inner.initialize()
    }

    fn insert(&self, name: &str, quantity: i64) -> Result<(), StoreError> {
        self.inner.insert(name, quantity)
    }

    fn update(&self, id: ItemId, name: &str, quantity: i64) -> Result<bool, StoreError> {
        self.inner.update(id, name, quantity)
    }

    fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        self.inner.delete(id)
    }

    fn list(&self, sort: SortSpec) -> Result<Vec<Item>, StoreError> {
        self.inner.list(sort)
    }
}
