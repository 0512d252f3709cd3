//! The list panel: rows in display order, sort selector and clear action

use pack_core::{Item, SortKey};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

use super::ItemRow;

/// Items already projected into display order by `pack_core::sorted_items`
pub struct PackingListView<'a> {
    items: &'a [&'a Item],
    sort_by: SortKey,
    icons: IconSet,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> PackingListView<'a> {
    pub fn new(items: &'a [&'a Item], sort_by: SortKey, icons: IconSet) -> Self {
        Self {
            items,
            sort_by,
            icons,
            selected: None,
            focused: false,
        }
    }

    /// Cursor row, as an index into the displayed items
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn sort_selector(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.prev(), styles::keybinding()),
            Span::raw(" "),
            Span::styled(self.sort_by.label(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.icons.next(), styles::keybinding()),
            Span::styled(" [s] ", styles::text_muted()),
        ])
    }

    fn clear_action(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(" [", styles::text_muted()),
            Span::styled("c", styles::keybinding()),
            Span::styled("] Clear list ", styles::text_muted()),
        ])
        .right_aligned()
    }
}

impl Widget for PackingListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Line::styled(" Packing list ", styles::text_secondary()))
            .title_bottom(self.sort_selector())
            .title_bottom(self.clear_action());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let height = usize::from(inner.height);
        let offset = scroll_offset(self.selected, height);

        for (row, (index, item)) in self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .enumerate()
        {
            let row_area = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };
            ItemRow::new(item, self.icons)
                .selected(self.selected == Some(index))
                .focused(self.focused)
                .render(row_area, buf);
        }
    }
}

/// First visible row so the cursor stays on screen
fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(index) if height > 0 && index >= height => index + 1 - height,
        _ => 0,
    }
}
