//! Configuration file parsing for Packing List
//!
//! Supports:
//! - `.packing/config.toml` - UI and list settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, parse_settings};
pub use types::*;
