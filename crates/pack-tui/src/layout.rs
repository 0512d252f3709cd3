//! Screen layout definitions for the TUI
//!
//! Stacks the header, entry form, list, summary footer and the optional
//! key hints line from top to bottom. The list takes whatever is left.

use ratatui::layout::{Constraint, Layout, Rect};

/// Bordered panels are one content row plus top and bottom border
const PANEL_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub summary: Rect,
    /// `None` when key hints are turned off in settings
    pub hints: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(PANEL_HEIGHT), // Header
        Constraint::Length(PANEL_HEIGHT), // Entry form
        Constraint::Min(3),               // List
        Constraint::Length(PANEL_HEIGHT), // Summary
    ];
    if show_hints {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        list: chunks[2],
        summary: chunks[3],
        hints: chunks.get(4).copied(),
    }
}
