use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing::Level;

pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logiq")
        .join("logiq.log")
}

pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}

/// Install a file-backed fmt subscriber. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn init(path: &Path, level_name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = parse_level(level_name);

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level.unwrap_or(Level::INFO))
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if level.is_none() {
        tracing::warn!(level_name, "unrecognized log level, using info");
    }
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
