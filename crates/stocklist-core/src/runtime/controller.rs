// stocklist-core/src/runtime/controller.rs
// ============================================================================
// Module: Stocklist Presentation Controller
// Description: Edit-session state machine sequencing storage operations.
// Purpose: Hold transient list state and map user intents onto the store.
// Dependencies: crate::{core, interfaces}, thiserror, tracing
// ============================================================================

//! ## Overview
//! The controller is the single canonical path between user surfaces and the
//! storage interface. It owns the cached item list, the active sort order,
//! the raw form fields, and the edit target. Every mutation is followed by a
//! full reload of the list; methods take `&mut self`, so one operation
//! completes before the next can begin. Form input is untrusted and is
//! validated before any storage call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Item;
use crate::core::ItemId;
use crate::core::SortSpec;
use crate::interfaces::ItemStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Form State
// ============================================================================

/// Raw form fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    /// Name field, untrimmed.
    pub name: String,
    /// Quantity field, unparsed.
    pub quantity: String,
}

impl ItemForm {
    /// Resets both fields to empty.
    fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Controller errors covering validation, session, and storage failures.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Name field is empty after trimming surrounding whitespace.
    #[error("item name must not be empty")]
    EmptyName,
    /// Quantity field does not parse as an integer.
    #[error("item quantity is not an integer: {input:?}")]
    InvalidQuantity {
        /// The rejected raw field value.
        input: String,
    },
    /// Edit requested for an id that is not in the current list.
    #[error("no item with id {id}")]
    UnknownItem {
        /// The unmatched identifier.
        id: ItemId,
    },
    /// Storage operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Controller
// ============================================================================

/// Presentation controller owning transient list state for one user surface.
///
/// The edit session is a two-state machine: `edit_target == None` is Idle and
/// submit inserts; `Some(id)` is Editing and submit updates that row. The
/// mode is decided solely by the presence of a target, never by item content.
#[derive(Debug)]
pub struct ItemListController<S> {
    /// Storage backend.
    store: S,
    /// Read-only cached copy of the full list, rebuilt after every mutation.
    items: Vec<Item>,
    /// Active sort order applied to every reload.
    sort: SortSpec,
    /// Raw form fields.
    form: ItemForm,
    /// Item currently targeted for edit, or `None` when idle.
    edit_target: Option<ItemId>,
}

impl<S: ItemStore> ItemListController<S> {
    /// Creates a controller over the given store with an empty cache.
    ///
    /// The cache starts empty; call [`Self::refresh`] to populate it.
    #[must_use]
    pub const fn new(store: S, sort: SortSpec) -> Self {
        Self {
            store,
            items: Vec::new(),
            sort,
            form: ItemForm {
                name: String::new(),
                quantity: String::new(),
            },
            edit_target: None,
        }
    }

    /// Returns the cached item list.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the active sort order.
    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Returns the current form fields.
    #[must_use]
    pub const fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Returns the item targeted for edit, or `None` when idle.
    #[must_use]
    pub const fn edit_target(&self) -> Option<ItemId> {
        self.edit_target
    }

    /// Reloads the cached list from the store under the active sort order.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Store`] when the engine read fails.
    pub fn refresh(&mut self) -> Result<(), ControllerError> {
        self.items = self.store.list(self.sort).map_err(|err| store_failure("list", err))?;
        Ok(())
    }

    /// Switches the active sort order and reloads the list.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Store`] when the reload fails.
    pub fn set_sort(&mut self, sort: SortSpec) -> Result<(), ControllerError> {
        self.sort = sort;
        self.refresh()
    }

    /// Overwrites both form fields with raw user input.
    pub fn set_form(&mut self, name: impl Into<String>, quantity: impl Into<String>) {
        self.form.name = name.into();
        self.form.quantity = quantity.into();
    }

    /// Targets an existing item for edit and pre-fills the form from the
    /// cached list. Any prior target is silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::UnknownItem`] when the id is not in the
    /// cached list.
    pub fn start_edit(&mut self, id: ItemId) -> Result<(), ControllerError> {
        let Some(item) = self.items.iter().find(|item| item.id == id) else {
            return Err(ControllerError::UnknownItem {
                id,
            });
        };
        self.form.name = item.name.clone();
        self.form.quantity = item.quantity.to_string();
        self.edit_target = Some(id);
        Ok(())
    }

    /// Abandons the edit session and clears the form.
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.form.clear();
    }

    /// Validates the form, then inserts (idle) or updates (editing), reloads
    /// the list, and returns the session to idle with a cleared form.
    ///
    /// A targeted row that vanished between edit start and submit is a
    /// storage-level no-op; the session still ends.
    ///
    /// # Errors
    ///
    /// Returns a validation variant when the form is invalid (no storage
    /// call is made), or [`ControllerError::Store`] when a storage
    /// operation fails.
    pub fn submit(&mut self) -> Result<(), ControllerError> {
        let (name, quantity) = self.validated_form()?;
        match self.edit_target {
            None => {
                self.store.insert(&name, quantity).map_err(|err| store_failure("insert", err))?;
            }
            Some(id) => {
                let matched = self
                    .store
                    .update(id, &name, quantity)
                    .map_err(|err| store_failure("update", err))?;
                if !matched {
                    tracing::warn!(id = id.as_i64(), "update matched no row");
                }
            }
        }
        self.refresh()?;
        self.form.clear();
        self.edit_target = None;
        Ok(())
    }

    /// Deletes the row matching `id` and reloads the list. When the deleted
    /// item was targeted for edit, the session returns to idle.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Store`] when a storage operation fails.
    pub fn remove(&mut self, id: ItemId) -> Result<(), ControllerError> {
        let matched = self.store.delete(id).map_err(|err| store_failure("delete", err))?;
        if !matched {
            tracing::warn!(id = id.as_i64(), "delete matched no row");
        }
        self.refresh()?;
        if self.edit_target == Some(id) {
            self.cancel_edit();
        }
        Ok(())
    }

    /// Validates the raw form into a trimmed name and parsed quantity.
    fn validated_form(&self) -> Result<(String, i64), ControllerError> {
        let name = self.form.name.trim();
        if name.is_empty() {
            return Err(ControllerError::EmptyName);
        }
        let quantity: i64 = self.form.quantity.trim().parse().map_err(|_| {
            ControllerError::InvalidQuantity {
                input: self.form.quantity.clone(),
            }
        })?;
        Ok((name.to_string(), quantity))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Logs a storage failure at the point of invocation and wraps it.
fn store_failure(operation: &'static str, error: StoreError) -> ControllerError {
    tracing::error!(operation, error = %error, "item store operation failed");
    ControllerError::Store(error)
}
