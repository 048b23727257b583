// stocklist-store-sqlite/src/lib.rs
// ============================================================================
// Module: SQLite Item Store
// Description: Durable ItemStore backend using SQLite.
// Purpose: Provide persistent single-table inventory storage for Stocklist.
// Dependencies: stocklist-core, rusqlite
// ============================================================================

//! ## Overview
//! This crate provides a SQLite-backed [`stocklist_core::ItemStore`]
//! implementation persisting the single `items` table. The schema bootstrap
//! is idempotent and every operation executes as one parameterized statement
//! whose implicit atomicity is the only transaction boundary.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteItemStore;
pub use store::SqliteJournalMode;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteSyncMode;
