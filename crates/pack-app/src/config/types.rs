//! Configuration types for Packing List
//!
//! Defines:
//! - `Settings` - Application settings (`.packing/config.toml`)
//! - `UiSettings`, `ListSettings` - Per-section settings
//! - `IconMode` - Emoji vs. plain ASCII glyphs

use pack_core::SortKey;
use serde::{Deserialize, Serialize};

/// Application settings (.packing/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub list: ListSettings,
}

/// Icon rendering mode for the TUI.
///
/// Emoji need a terminal font that has them; `ascii` works everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

impl IconMode {
    pub fn uses_emoji(self) -> bool {
        matches!(self, IconMode::Unicode)
    }
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Header text
    #[serde(default = "default_title")]
    pub title: String,

    /// Question shown above the entry form
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Icon mode: "unicode" (default) or "ascii"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the key binding hints line
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            prompt: default_prompt(),
            icons: IconMode::default(),
            show_key_hints: true,
        }
    }
}

/// List display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListSettings {
    /// Sort key selected at startup
    #[serde(default)]
    pub default_sort: SortKey,
}

fn default_title() -> String {
    "🌴 FAR AWAY 💼".to_string()
}

fn default_prompt() -> String {
    "What do you need for your 😍 trip?".to_string()
}

fn default_true() -> bool {
    true
}
