//! pack-app - Application state and message handling for Packing List
//!
//! This crate implements the TEA (The Elm Architecture) pattern: every user
//! intent is a [`Message`], [`handler::update`] is the only code that mutates
//! [`AppState`], and renderers read the state without touching it.
//! Nothing here depends on a terminal library.

pub mod config;
pub mod entry_form;
pub mod handler;
pub mod input_key;
pub mod list_view;
pub mod message;
pub mod packing_list;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use entry_form::EntryForm;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use list_view::ListView;
pub use message::Message;
pub use packing_list::PackingList;
pub use process::process_message;
pub use state::{AppPhase, AppState, Focus};
