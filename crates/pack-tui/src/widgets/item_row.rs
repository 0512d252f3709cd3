//! One line of the packing list

use pack_core::Item;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

/// Checkbox, `quantity description` label and delete marker for one item.
///
/// Stateless: toggling and deleting are key bindings on the row under the
/// cursor, addressed by the item's id.
pub struct ItemRow<'a> {
    item: &'a Item,
    icons: IconSet,
    selected: bool,
    focused: bool,
}

impl<'a> ItemRow<'a> {
    pub fn new(item: &'a Item, icons: IconSet) -> Self {
        Self {
            item,
            icons,
            selected: false,
            focused: false,
        }
    }

    /// Mark as the cursor row
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Whether the list panel has keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ItemRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let packed = self.item.packed;
        let cursor = if self.selected && self.focused {
            self.icons.cursor()
        } else {
            " "
        };
        let label_style = if packed {
            styles::packed_label()
        } else {
            styles::unpacked_label()
        };

        let line = Line::from(vec![
            Span::styled(cursor, styles::accent()),
            Span::raw(" "),
            Span::styled(self.icons.checkbox(packed), styles::checkbox(packed)),
            Span::raw(" "),
            Span::styled(self.item.label(), label_style),
        ]);
        let marker = Span::styled(self.icons.delete(), styles::delete_marker());
        let marker_width = marker.width() as u16;

        // A long label is cut short before the delete marker is
        let row = Rect { height: 1, ..area };
        let label_width = row.width.saturating_sub(marker_width + 1);
        let (end_x, _) = buf.set_line(row.x, row.y, &line, label_width);
        buf.set_span(end_x + 1, row.y, &marker, marker_width);

        if self.selected {
            buf.set_style(row, styles::row_selected(self.focused));
        }
    }
}
