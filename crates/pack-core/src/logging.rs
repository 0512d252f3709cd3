//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result, ResultExt};

const LOG_FILE_NAME: &str = "pack.log";
const DEFAULT_FILTER: &str = "packing_list=info,pack_app=info,pack_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/packing-list/logs/` so that nothing
/// reaches the terminal the TUI is drawing on.
/// Log level is controlled by the `PACK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PACK_LOG=debug cargo run
/// PACK_LOG=pack_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Creating log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env("PACK_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Packing List starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("packing-list").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_directory() {
        let path = get_log_directory();
        assert!(path.ends_with("packing-list/logs"));
    }
}
