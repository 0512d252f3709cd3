//! Application state (Model in TEA pattern)

use pack_core::{sorted_items, Item, ItemId, PackingStats, Summary};

use crate::config::Settings;
use crate::entry_form::EntryForm;
use crate::list_view::ListView;
use crate::packing_list::PackingList;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which panel receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing a new item
    #[default]
    Form,
    /// Navigating, toggling and deleting rows
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        }
    }
}

/// Complete application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// The canonical list. Only `handler::update` mutates it.
    pub items: PackingList,

    pub form: EntryForm,

    pub list_view: ListView,

    pub focus: Focus,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            list_view: ListView::new(settings.list.default_sort),
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Items in display order. Recomputed on every call.
    pub fn displayed_items(&self) -> Vec<&Item> {
        sorted_items(self.items.items(), self.list_view.sort_by)
    }

    /// Display index of the cursor row
    pub fn selected_index(&self) -> Option<usize> {
        self.list_view.selected(self.items.len())
    }

    /// Item under the cursor
    pub fn selected_item(&self) -> Option<&Item> {
        let index = self.selected_index()?;
        self.displayed_items().get(index).copied()
    }

    /// Put the cursor back on `id` after the display order changed
    pub fn reselect(&mut self, id: ItemId) {
        let position = self.displayed_items().iter().position(|item| item.id == id);
        match position {
            Some(index) => self.list_view.select(index, self.items.len()),
            None => self.list_view.clamp(self.items.len()),
        }
    }

    pub fn stats(&self) -> PackingStats {
        PackingStats::from_items(self.items.items())
    }

    pub fn summary(&self) -> Summary {
        Summary::from_stats(self.stats())
    }
}
