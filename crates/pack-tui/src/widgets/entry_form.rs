//! Entry form: quantity selector and description input

use pack_app::EntryForm;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{icons::IconSet, styles};

const PLACEHOLDER: &str = "Item...";

/// Renders the form inside a bordered panel titled with the prompt.
///
/// Layout of the content row: `Qty ◂  4 ▸  description█      ⏎ Add`
pub struct EntryFormView<'a> {
    form: &'a EntryForm,
    prompt: &'a str,
    icons: IconSet,
    focused: bool,
}

impl<'a> EntryFormView<'a> {
    pub fn new(form: &'a EntryForm, prompt: &'a str, icons: IconSet) -> Self {
        Self {
            form,
            prompt,
            icons,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn quantity_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled("Qty ", styles::text_muted()),
            Span::styled(self.icons.prev(), styles::accent()),
            Span::styled(format!(" {:>2} ", self.form.quantity.get()), styles::accent_bold()),
            Span::styled(self.icons.next(), styles::accent()),
            Span::raw("  "),
        ]
    }

    fn submit_hint(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.icons.enter(), styles::keybinding()),
            Span::styled(" Add ", styles::text_muted()),
        ])
    }
}

impl Widget for EntryFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt = self.icons.text(self.prompt);
        let block = styles::glass_block(self.focused)
            .title(Line::styled(format!(" {prompt} "), styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let quantity = Line::from(self.quantity_spans());
        let hint = self.submit_hint();
        let quantity_width = quantity.width() as u16;
        let hint_width = hint.width() as u16;

        let (x, _) = buf.set_line(inner.x, inner.y, &quantity, inner.width);

        // Hint goes right-aligned only if the input keeps some room
        let right = inner.x + inner.width;
        let show_hint = quantity_width + hint_width + 8 <= inner.width;
        let input_end = if show_hint {
            buf.set_line(right - hint_width, inner.y, &hint, hint_width);
            right - hint_width - 1
        } else {
            right
        };
        let input_width = input_end.saturating_sub(x);
        if input_width == 0 {
            return;
        }

        let input = if self.form.description.is_empty() && !self.focused {
            Line::styled(PLACEHOLDER, styles::text_muted())
        } else if self.focused {
            let cursor = self.icons.text_cursor();
            let room = usize::from(input_width).saturating_sub(1);
            Line::from(vec![
                Span::styled(visible_tail(&self.form.description, room), styles::text_primary()),
                Span::styled(cursor, styles::accent()),
            ])
        } else {
            let room = usize::from(input_width);
            Line::styled(visible_tail(&self.form.description, room), styles::text_primary())
        };
        buf.set_line(x, inner.y, &input, input_width);
    }
}

/// Longest suffix of `text` that fits in `max_width` columns.
///
/// The end of the input is what the user is typing, so that part stays visible.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &text[start..]
}
