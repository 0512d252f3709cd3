//! Custom widget components

mod entry_form;
mod header;
mod item_row;
mod key_hints;
mod packing_list;
mod summary;

pub use entry_form::EntryFormView;
pub use header::Header;
pub use item_row::ItemRow;
pub use key_hints::KeyHints;
pub use packing_list::PackingListView;
pub use summary::SummaryBar;
