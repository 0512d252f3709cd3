//! Color palette.
//!
//! Named terminal colors only, so the theme follows the user's terminal scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset; // Terminal background
pub const CARD_BG: Color = Color::Reset; // Panel backgrounds
pub const ROW_HIGHLIGHT_BG: Color = Color::DarkGray; // Cursor row when the list is not focused

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const TITLE: Color = Color::Yellow;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent background

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Packed / complete
pub const STATUS_RED: Color = Color::Red; // Delete marker
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints
