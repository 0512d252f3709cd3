//! Key binding hints for the focused panel

use pack_app::Focus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// One line of `[key] action` pairs, changing with focus
pub struct KeyHints {
    focus: Focus,
}

impl KeyHints {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            Focus::Form => &[
                ("Enter", "Add"),
                ("Up/Down", "Quantity"),
                ("Tab", "List"),
                ("Esc", "Quit"),
            ],
            Focus::List => &[
                ("Space", "Pack"),
                ("d", "Delete"),
                ("s", "Sort"),
                ("c", "Clear"),
                ("Tab", "Form"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.bindings() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {action}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
