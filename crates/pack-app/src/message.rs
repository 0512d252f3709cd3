//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use pack_core::{Item, ItemId, Quantity, SortKey};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event from the poll timeout
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Entry Form Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the description being typed
    FormInput { text: String },
    /// Pick a quantity from the 1..=20 selector
    SetQuantity(Quantity),
    /// Submit the form; silently ignored while the description is empty
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // List Mutations
    // ─────────────────────────────────────────────────────────
    /// Append an item to the end of the list
    AddItem(Item),
    /// Flip `packed` on the item with this id
    ToggleItem(ItemId),
    /// Remove the item with this id
    DeleteItem(ItemId),
    /// Remove every item, no confirmation
    ClearList,

    // ─────────────────────────────────────────────────────────
    // List Display Messages
    // ─────────────────────────────────────────────────────────
    /// Change the display order
    SetSort(SortKey),
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus between the entry form and the list
    ToggleFocus,
}
