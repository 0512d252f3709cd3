//! List display state: sort key and the keyboard cursor
//!
//! The cursor indexes the *displayed* order, so it is only meaningful
//! together with [`ListView::sort_by`] and the current item count.

use pack_core::SortKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub sort_by: SortKey,
    selected: usize,
}

impl ListView {
    pub fn new(sort_by: SortKey) -> Self {
        Self {
            sort_by,
            selected: 0,
        }
    }

    /// Row under the cursor, `None` when the list is empty
    pub fn selected(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.selected.min(len - 1))
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index;
        self.clamp(len);
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the cursor on a real row after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
