//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/chat-entities/logs/ on Linux)

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("replay-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        chat_entities_config::paths::log_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Parse a level name, `None` for anything unrecognized
fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Level from `RUST_LOG`, then the config file, then `Info`
fn resolve_level(env_level: Option<&str>, config_level: &str) -> LevelFilter {
    env_level
        .and_then(parse_level)
        .or_else(|| parse_level(config_level))
        .unwrap_or(LevelFilter::Info)
}

/// Initialize file-based logging
///
/// Creates a log file with timestamp and returns its path.
pub fn init(config_level: &str) -> Result<PathBuf> {
    let log_file = log_file_path();
    let env_level = std::env::var("RUST_LOG").ok();
    let level = resolve_level(env_level.as_deref(), config_level);

    // Configure simplelog with timestamps
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file: {:?}", log_file))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_level_wins() {
        assert_eq!(resolve_level(Some("trace"), "warn"), LevelFilter::Trace);
    }

    #[test]
    fn test_config_level_used_without_env() {
        assert_eq!(resolve_level(None, "WARN"), LevelFilter::Warn);
        assert_eq!(resolve_level(Some("chatty"), "error"), LevelFilter::Error);
    }

    #[test]
    fn test_unknown_levels_fall_back_to_info() {
        assert_eq!(resolve_level(None, "loud"), LevelFilter::Info);
    }
}
