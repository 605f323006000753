//! Store configuration
//!
//! Loaded from `.chat-entities.toml`; every key is optional.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::paths;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    /// Log level filter (error, warn, info, debug, trace). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Locale for user-facing labels
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Translations JSON file; defaults to `<config dir>/i18n/<locale>.json`
    #[serde(default)]
    pub translations_file: Option<PathBuf>,

    /// Save the entity state after a run and load it on the next one
    #[serde(default)]
    pub persist_snapshot: bool,

    /// Snapshot location; defaults to `<cache dir>/entities.json`
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            locale: default_locale(),
            translations_file: None,
            persist_snapshot: false,
            snapshot_path: None,
        }
    }
}

impl StoreConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded store config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default store config");
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Snapshot location, falling back to the cache directory
    pub fn resolved_snapshot_path(&self) -> anyhow::Result<PathBuf> {
        match &self.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => paths::snapshot_path(),
        }
    }

    /// Translations file, falling back to the config directory
    pub fn resolved_translations_path(&self) -> anyhow::Result<PathBuf> {
        match &self.translations_file {
            Some(path) => Ok(path.clone()),
            None => paths::translations_path(&self.locale),
        }
    }
}
