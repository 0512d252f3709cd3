//! Semantic style builders.

use pack_core::Summary;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TITLE)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Item rows ---

/// Label of a packed item: struck through and dimmed
pub fn packed_label() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn unpacked_label() -> Style {
    text_primary()
}

pub fn checkbox(packed: bool) -> Style {
    if packed {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        text_secondary()
    }
}

pub fn delete_marker() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Patch applied over the cursor row.
///
/// Only colors are set so the label keeps its strikethrough.
pub fn row_selected(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
    } else {
        Style::default().bg(palette::ROW_HIGHLIGHT_BG)
    }
}

// --- Summary ---
pub fn summary(summary: &Summary) -> Style {
    match summary {
        Summary::Empty => text_muted().add_modifier(Modifier::ITALIC),
        Summary::Complete => Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        Summary::Progress { .. } => text_secondary(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}
