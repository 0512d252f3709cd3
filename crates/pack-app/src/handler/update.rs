//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use pack_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Entry Form
        // ─────────────────────────────────────────────────────────
        Message::FormInput { text } => {
            state.form.set_description(text);
            UpdateResult::none()
        }

        Message::SetQuantity(quantity) => {
            state.form.set_quantity(quantity);
            UpdateResult::none()
        }

        Message::SubmitForm => match state.form.submit() {
            Some(item) => UpdateResult::message(Message::AddItem(item)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // List Mutations
        // ─────────────────────────────────────────────────────────
        Message::AddItem(item) => {
            state.items.add(item);
            UpdateResult::none()
        }

        Message::ToggleItem(id) => {
            state.items.toggle(id);
            // Packed sort may have moved the row; keep the cursor on it
            if state.list_view.sort_by == pack_core::SortKey::Packed {
                state.reselect(id);
            }
            UpdateResult::none()
        }

        Message::DeleteItem(id) => {
            state.items.delete(id);
            state.list_view.clamp(state.items.len());
            UpdateResult::none()
        }

        Message::ClearList => {
            state.items.clear();
            state.list_view.clamp(0);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Display
        // ─────────────────────────────────────────────────────────
        Message::SetSort(key) => {
            let selected = state.selected_item().map(|item| item.id);
            debug!(sort = %key, "Sort changed");
            state.list_view.sort_by = key;
            if let Some(id) = selected {
                state.reselect(id);
            }
            UpdateResult::none()
        }

        Message::CursorUp => {
            state.list_view.move_up();
            UpdateResult::none()
        }

        Message::CursorDown => {
            state.list_view.move_down(state.items.len());
            UpdateResult::none()
        }

        Message::CursorTop => {
            state.list_view.move_to_top();
            UpdateResult::none()
        }

        Message::CursorBottom => {
            state.list_view.move_to_bottom(state.items.len());
            UpdateResult::none()
        }

        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            state.list_view.clamp(state.items.len());
            UpdateResult::none()
        }
    }
}
