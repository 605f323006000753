//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/chat-entities/`, `~/.cache/chat-entities/`
//! - macOS: `~/Library/Application Support/chat-entities/`, `~/Library/Caches/chat-entities/`
//! - Windows: `%APPDATA%\chat-entities\`, `%LOCALAPPDATA%\chat-entities\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "chat-entities";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default location of the entity snapshot
pub fn snapshot_path() -> Result<PathBuf> {
    Ok(cache_dir()?.join("entities.json"))
}

/// Directory for log files
pub fn log_dir() -> Result<PathBuf> {
    let dir = cache_dir()?.join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default translations file for `locale`
pub fn translations_path(locale: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join("i18n").join(format!("{locale}.json")))
}
