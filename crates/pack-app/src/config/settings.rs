//! Settings parser for .packing/config.toml

use super::types::Settings;
use pack_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".packing";

const DEFAULT_CONFIG: &str = r#"# Packing List Configuration

[ui]
# Header text
title = "🌴 FAR AWAY 💼"

# Question shown above the entry form
prompt = "What do you need for your 😍 trip?"

# "unicode" or "ascii" (for terminals without emoji)
icons = "unicode"

# Show the key binding hints line
show_key_hints = true

[list]
# Initial sort: "input", "description" or "packed"
default_sort = "input"
"#;

/// Parse settings from TOML text
pub fn parse_settings(content: &str, origin: &Path) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_parse(origin, e.to_string()))
}

/// Location of the config file for a base directory
pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base>/.packing/config.toml`
///
/// A missing file yields defaults; an unreadable or invalid file is logged
/// and also yields defaults.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = config_path(base);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content, &config_path) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("{}", e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `<base>/.packing/config.toml` with commented defaults, if absent
pub fn init_config_dir(base: &Path) -> Result<()> {
    let config_dir = base.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create {CONFIG_DIR} dir: {e}")))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {e}")))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
