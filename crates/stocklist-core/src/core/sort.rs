// stocklist-core/src/core/sort.rs
// ============================================================================
// Module: Stocklist Sort Orders
// Description: Closed enumeration of listing sort specifications.
// Purpose: Map each user-selectable sort order onto a deterministic ordering.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Listings are always fully ordered. Each variant maps to a concrete SQL
//! ORDER BY clause for durable stores and to an equivalent comparator for the
//! in-memory store. Name comparisons use byte-wise ordering, matching the
//! engine's default BINARY collation, so both backends agree on every input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::core::item::Item;

// ============================================================================
// SECTION: Sort Specification
// ============================================================================

/// Sort order for item listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortSpec {
    /// Name ascending (engine default collation).
    #[default]
    NameAz,
    /// Name descending.
    NameZa,
    /// Quantity ascending.
    QtyLh,
    /// Quantity descending.
    QtyHl,
    /// Quantity ascending, then name ascending among ties.
    QtyLhNameAz,
    /// Quantity descending, then name descending among ties.
    QtyHlNameZa,
}

impl SortSpec {
    /// Returns the SQL ORDER BY clause body for this sort order.
    #[must_use]
    pub const fn order_clause(self) -> &'static str {
        match self {
            Self::NameAz => "name ASC",
            Self::NameZa => "name DESC",
            Self::QtyLh => "quantity ASC",
            Self::QtyHl => "quantity DESC",
            Self::QtyLhNameAz => "quantity ASC, name ASC",
            Self::QtyHlNameZa => "quantity DESC, name DESC",
        }
    }

    /// Compares two items under this sort order.
    ///
    /// Ties not broken by the clause fall back to id order so the in-memory
    /// backend stays deterministic; engines leave tie order unspecified.
    #[must_use]
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        let ordering = match self {
            Self::NameAz => a.name.cmp(&b.name),
            Self::NameZa => b.name.cmp(&a.name),
            Self::QtyLh => a.quantity.cmp(&b.quantity),
            Self::QtyHl => b.quantity.cmp(&a.quantity),
            Self::QtyLhNameAz => a.quantity.cmp(&b.quantity).then_with(|| a.name.cmp(&b.name)),
            Self::QtyHlNameZa => b.quantity.cmp(&a.quantity).then_with(|| b.name.cmp(&a.name)),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }

    /// Returns every sort specification in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::NameAz,
            Self::NameZa,
            Self::QtyLh,
            Self::QtyHl,
            Self::QtyLhNameAz,
            Self::QtyHlNameZa,
        ]
    }
}
