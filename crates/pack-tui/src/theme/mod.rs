//! Centralized theme for the packing list TUI.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Emoji glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
