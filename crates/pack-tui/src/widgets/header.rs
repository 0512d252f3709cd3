//! Header bar with the decorative title

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Static title banner. No state and no inputs.
pub struct Header<'a> {
    title: &'a str,
    icons: IconSet,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, icons: IconSet) -> Self {
        Self { title, icons }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = self.icons.text(self.title);
        Paragraph::new(Line::styled(title, styles::title()))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
