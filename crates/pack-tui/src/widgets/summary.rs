//! Summary footer with completion statistics

use pack_core::Summary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

/// Footer line derived from the canonical list
pub struct SummaryBar {
    summary: Summary,
    icons: IconSet,
}

impl SummaryBar {
    pub fn new(summary: Summary, icons: IconSet) -> Self {
        Self { summary, icons }
    }
}

impl Widget for SummaryBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let text = self.summary.message(self.icons.emoji());
        Paragraph::new(Line::styled(text, styles::summary(&self.summary)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
