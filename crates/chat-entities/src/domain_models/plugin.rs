//! Plugin models

use crate::toolkit::Entity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lifecycle state reported by the server for a plugin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PluginState {
    #[default]
    NotRunning,
    Starting,
    Running,
    FailedToStart,
    FailedToStayRunning,
    Stopping,
    Unknown(i64),
}

impl From<i64> for PluginState {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::NotRunning,
            1 => Self::Starting,
            2 => Self::Running,
            3 => Self::FailedToStart,
            4 => Self::FailedToStayRunning,
            5 => Self::Stopping,
            other => Self::Unknown(other),
        }
    }
}

impl From<PluginState> for i64 {
    fn from(state: PluginState) -> Self {
        match state {
            PluginState::NotRunning => 0,
            PluginState::Starting => 1,
            PluginState::Running => 2,
            PluginState::FailedToStart => 3,
            PluginState::FailedToStayRunning => 4,
            PluginState::Stopping => 5,
            PluginState::Unknown(other) => other,
        }
    }
}

/// Status of a plugin on one cluster node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginStatus {
    pub plugin_id: String,
    pub cluster_id: String,
    pub plugin_path: String,
    pub state: PluginState,
    pub name: String,
    pub description: String,
    pub version: String,
}

impl Entity for PluginStatus {
    fn entity_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.plugin_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginManifest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
}

/// A plugin listed in the marketplace
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplacePlugin {
    pub homepage_url: String,
    pub download_url: String,
    pub manifest: PluginManifest,
    /// Empty when the plugin is not installed
    pub installed_version: String,
}

impl MarketplacePlugin {
    pub fn is_installed(&self) -> bool {
        !self.installed_version.is_empty()
    }
}
