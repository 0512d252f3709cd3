//! pack-tui - Terminal UI for Packing List
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, turns crossterm events into pack-app messages and renders
//! [`pack_app::AppState`] every frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
