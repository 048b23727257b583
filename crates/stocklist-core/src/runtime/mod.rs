// stocklist-core/src/runtime/mod.rs
// ============================================================================
// Module: Stocklist Runtime
// Description: Presentation controller and in-memory store helpers.
// Purpose: Sequence user intents onto the storage interface.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the presentation controller that every user
//! surface drives, plus an in-memory store for tests and demos. All surfaces
//! must call into the same controller logic to preserve the edit-session
//! state machine.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod controller;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use controller::ControllerError;
pub use controller::ItemForm;
pub use controller::ItemListController;
pub use store::InMemoryItemStore;
pub use store::SharedItemStore;
