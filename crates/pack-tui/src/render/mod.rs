//! Main render/view function (View in TEA pattern)


use pack_app::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it. The sorted view is
/// recomputed here every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let ui = &state.settings.ui;
    let icons = IconSet::new(ui.icons);
    let areas = layout::create(area, ui.show_key_hints);

    frame.render_widget(widgets::Header::new(&ui.title, icons), areas.header);

    frame.render_widget(
        widgets::EntryFormView::new(&state.form, &ui.prompt, icons)
            .focused(state.focus == Focus::Form),
        areas.form,
    );

    let displayed = state.displayed_items();
    frame.render_widget(
        widgets::PackingListView::new(&displayed, state.list_view.sort_by, icons)
            .selected(state.selected_index())
            .focused(state.focus == Focus::List),
        areas.list,
    );

    frame.render_widget(widgets::SummaryBar::new(state.summary(), icons), areas.summary);

    if let Some(hints) = areas.hints {
        frame.render_widget(widgets::KeyHints::new(state.focus), hints);
    }
}
