// stocklist-core/src/interfaces/mod.rs
// ============================================================================
// Module: Stocklist Interfaces
// Description: Backend-agnostic storage interface for inventory items.
// Purpose: Define the contract surface the presentation runtime depends on.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The storage interface is the entire coupling between the presentation
//! runtime and any persistence backend. Implementations execute each
//! operation as a single atomic statement and surface engine failures as
//! [`StoreError`]; missing-row mutations are reported through the returned
//! flag rather than as errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Item;
use crate::core::ItemId;
use crate::core::SortSpec;

// ============================================================================
// SECTION: Item Store
// ============================================================================

/// Item store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("item store io error: {0}")]
    Io(String),
    /// Storage engine reported an error.
    #[error("item store db error: {0}")]
    Db(String),
    /// Store data or request is invalid.
    #[error("item store invalid data: {0}")]
    Invalid(String),
}

/// Item store for inventory persistence.
pub trait ItemStore {
    /// Ensures the item table exists. Idempotent and safe on every start.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when schema creation fails.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Appends one row; the engine assigns the id. Callers reload the list
    /// to observe the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying write fails.
    fn insert(&self, name: &str, quantity: i64) -> Result<(), StoreError>;

    /// Replaces name and quantity for the row matching `id`. Returns `false`
    /// when no row matched; that outcome is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying write fails.
    fn update(&self, id: ItemId, name: &str, quantity: i64) -> Result<bool, StoreError>;

    /// Removes the row matching `id`. Returns `false` when no row matched;
    /// that outcome is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying write fails.
    fn delete(&self, id: ItemId) -> Result<bool, StoreError>;

    /// Returns the full ordered item set under the requested sort order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the engine read fails.
    fn list(&self, sort: SortSpec) -> Result<Vec<Item>, StoreError>;
}
