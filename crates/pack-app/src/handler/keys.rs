//! Key event handlers for each focus

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use pack_core::Quantity;

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Force quit from anywhere
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => return Some(Message::ToggleFocus),
        _ => {}
    }

    match state.focus {
        Focus::Form => handle_key_form(state, key),
        Focus::List => handle_key_list(state, key),
    }
}

/// Handle key events while typing into the entry form
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.form;
    match key {
        InputKey::Enter => Some(Message::SubmitForm),
        InputKey::Esc => Some(Message::Quit),

        // Description editing
        InputKey::Char(c) => {
            let mut text = form.description.clone();
            text.push(c);
            Some(Message::FormInput { text })
        }
        InputKey::Backspace => {
            if form.description.is_empty() {
                return None;
            }
            let mut text = form.description.clone();
            text.pop();
            Some(Message::FormInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::FormInput {
            text: String::new(),
        }),

        // Quantity selector
        InputKey::Up | InputKey::PageUp => Some(Message::SetQuantity(form.quantity.next())),
        InputKey::Down | InputKey::PageDown => Some(Message::SetQuantity(form.quantity.prev())),
        InputKey::Home => Some(Message::SetQuantity(Quantity::MIN)),
        InputKey::End => Some(Message::SetQuantity(Quantity::MAX)),

        _ => None,
    }
}

/// Handle key events while the list has focus
fn handle_key_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Cursor
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorTop),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorBottom),

        // Row intents, addressed by id
        InputKey::Char(' ' | 'x') | InputKey::Enter => state
            .selected_item()
            .map(|item| Message::ToggleItem(item.id)),
        InputKey::Char('d') | InputKey::Delete => state
            .selected_item()
            .map(|item| Message::DeleteItem(item.id)),

        // List-wide
        InputKey::Char('s') => Some(Message::SetSort(state.list_view.sort_by.next())),
        InputKey::Char('S') => Some(Message::SetSort(state.list_view.sort_by.prev())),
        InputKey::Char('c') => Some(Message::ClearList),

        _ => None,
    }
}
