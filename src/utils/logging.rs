use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::core::constants::LOG_FILTER_ENV;

const DEFAULT_FILTER: &str = "info";

/// Send `tracing` output to `path`, appending to the file if it exists.
///
/// The level comes from the `PARLEY_LOG` environment variable and defaults
/// to `info`. Nothing is ever written to the terminal, which the chat
/// screen owns.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = open_log_file(path)?;
    let filter = build_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn build_filter(spec: Option<&str>) -> EnvFilter {
    spec.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
