//! Packing List
//!
//! A terminal packing list: add items with a quantity, tick them off as they
//! go into the bag, sort the view, and watch the summary climb to 100%.
//!
//! The work is split across the workspace crates:
//! - `pack-core` - item model, sorting, statistics, errors, logging
//! - `pack-app` - TEA state, messages and the update handler
//! - `pack-tui` - ratatui rendering and the event loop

use std::path::PathBuf;

use pack_app::config::{self, IconMode};
use pack_app::{AppState, PackingList};
use pack_core::prelude::*;
use pack_core::{sample_items, SortKey};

/// Startup options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory holding `.packing/config.toml`
    pub config_dir: PathBuf,
    /// Start with the sample items instead of an empty list
    pub sample: bool,
    /// Initial sort, overrides the config file
    pub sort: Option<SortKey>,
    /// Force ASCII icons, overrides the config file
    pub ascii: bool,
}

/// Main application entry point
pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize error handling
    install_error_hook()?;

    // Initialize logging (to file, since TUI owns stdout)
    pack_core::logging::init()?;

    info!("Config directory: {}", options.config_dir.display());

    let state = initial_state(&options);
    let result = pack_tui::run(state).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Packing List exiting");
    result
}

/// Install color-eyre's panic and error report hooks
fn install_error_hook() -> Result<()> {
    color_eyre::install().map_err(|e| Error::error_hook(e.to_string()))
}

/// Build the starting state from the config file and command line overrides
pub fn initial_state(options: &RunOptions) -> AppState {
    let mut settings = config::load_settings(&options.config_dir);

    if let Some(sort) = options.sort {
        settings.list.default_sort = sort;
    }
    if options.ascii {
        settings.ui.icons = IconMode::Ascii;
    }

    let mut state = AppState::with_settings(settings);
    if options.sample {
        state.items = PackingList::with_items(sample_items());
    }
    state
}
