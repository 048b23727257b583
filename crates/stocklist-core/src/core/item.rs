// stocklist-core/src/core/item.rs
// ============================================================================
// Module: Stocklist Item Model
// Description: Canonical persisted inventory item and its identifier.
// Purpose: Provide a strongly typed, serializable row shape with a stable id.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the single persisted entity of the system. Identifiers
//! are engine-assigned integers and immutable after creation. Name and
//! quantity validation happens at the controller boundary rather than within
//! these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier
// ============================================================================

/// Item identifier assigned by the storage engine on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Creates an item identifier from a raw engine rowid.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the identifier as a raw integer.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Item
// ============================================================================

/// Persisted inventory row: engine-assigned id, name, and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Engine-assigned unique identifier, immutable after insert.
    pub id: ItemId,
    /// Item name. Non-empty in intended use; enforced at the controller.
    pub name: String,
    /// Item quantity. Non-negative in intended use; not enforced by schema.
    pub quantity: i64,
}
