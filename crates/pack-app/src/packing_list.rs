//! The canonical packing list
//!
//! Insertion order is the canonical order. Every operation is total: a
//! missing id is a no-op, never an error.

use pack_core::prelude::*;
use pack_core::{Item, ItemId};

/// Owned, ordered collection of items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingList {
    items: Vec<Item>,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List pre-filled with `items`, in the given order
    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append to the end. Validation is the entry form's job.
    pub fn add(&mut self, item: Item) {
        debug!(id = %item.id, description = %item.description, "Adding item");
        self.items.push(item);
    }

    /// Replace the matching item with a toggled copy, in place.
    pub fn toggle(&mut self, id: ItemId) {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                *item = item.toggled();
                debug!(%id, packed = item.packed, "Toggled item");
            }
            None => trace!(%id, "Toggle ignored, no such item"),
        }
    }

    /// Remove the matching item.
    pub fn delete(&mut self, id: ItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() < before {
            debug!(%id, "Deleted item");
        } else {
            trace!(%id, "Delete ignored, no such item");
        }
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "Clearing list");
        self.items.clear();
    }
}
