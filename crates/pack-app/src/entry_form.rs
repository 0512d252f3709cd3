//! Entry form state: the description being typed and the chosen quantity

use pack_core::prelude::*;
use pack_core::{IdGenerator, Item, ItemId, Quantity};

/// Transient input for the next item
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub description: String,
    pub quantity: Quantity,
    ids: IdGenerator,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Build an item from the current input and reset the form.
    ///
    /// An empty description means nothing happens at all: no item, no reset.
    pub fn submit(&mut self) -> Option<Item> {
        self.submit_with(IdGenerator::next_id)
    }

    /// Same as [`submit`](Self::submit) with an explicit timestamp for the id
    pub fn submit_at(&mut self, now_ms: u64) -> Option<Item> {
        self.submit_with(|ids| ids.next_id_at(now_ms))
    }

    fn submit_with(&mut self, next_id: impl FnOnce(&mut IdGenerator) -> ItemId) -> Option<Item> {
        if self.description.is_empty() {
            trace!("Submit ignored, description is empty");
            return None;
        }

        let id = next_id(&mut self.ids);
        let description = std::mem::take(&mut self.description);
        let quantity = std::mem::take(&mut self.quantity);
        Some(Item::new(id, description, quantity))
    }
}
