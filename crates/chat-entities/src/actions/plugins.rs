//! Plugin and marketplace actions

use super::RawAction;
use crate::domain_models::{MarketplacePlugin, PluginStatus};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PluginActionType {
    ReceivedPluginStatuses,
    ReceivedPluginStatus,
    ReceivedPluginStatusDeleted,
    ReceivedMarketplacePlugins,
    MarketplacePluginInstalled,
    MarketplacePluginUninstalled,
    FilterMarketplacePlugins,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PluginAction {
    /// Full status list from the server, replaces what is stored
    ReceivedPluginStatuses(Vec<PluginStatus>),
    ReceivedPluginStatus(PluginStatus),
    ReceivedPluginStatusDeleted { plugin_id: String },
    ReceivedMarketplacePlugins(Vec<MarketplacePlugin>),
    MarketplacePluginInstalled { id: String, version: String },
    MarketplacePluginUninstalled { id: String },
    FilterMarketplacePlugins { filter: String },
}

impl PluginAction {
    pub fn action_type(&self) -> PluginActionType {
        match self {
            Self::ReceivedPluginStatuses(_) => PluginActionType::ReceivedPluginStatuses,
            Self::ReceivedPluginStatus(_) => PluginActionType::ReceivedPluginStatus,
            Self::ReceivedPluginStatusDeleted { .. } => PluginActionType::ReceivedPluginStatusDeleted,
            Self::ReceivedMarketplacePlugins(_) => PluginActionType::ReceivedMarketplacePlugins,
            Self::MarketplacePluginInstalled { .. } => PluginActionType::MarketplacePluginInstalled,
            Self::MarketplacePluginUninstalled { .. } => PluginActionType::MarketplacePluginUninstalled,
            Self::FilterMarketplacePlugins { .. } => PluginActionType::FilterMarketplacePlugins,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = PluginActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            PluginActionType::ReceivedPluginStatuses => Self::ReceivedPluginStatuses(raw.data()),
            PluginActionType::ReceivedPluginStatus => Self::ReceivedPluginStatus(raw.data()),
            PluginActionType::ReceivedPluginStatusDeleted => Self::ReceivedPluginStatusDeleted {
                plugin_id: raw.data_field("plugin_id"),
            },
            PluginActionType::ReceivedMarketplacePlugins => {
                Self::ReceivedMarketplacePlugins(raw.data())
            }
            PluginActionType::MarketplacePluginInstalled => Self::MarketplacePluginInstalled {
                id: raw.data_field("id"),
                version: raw.data_field("version"),
            },
            PluginActionType::MarketplacePluginUninstalled => Self::MarketplacePluginUninstalled {
                id: raw.data_field("id"),
            },
            PluginActionType::FilterMarketplacePlugins => Self::FilterMarketplacePlugins {
                filter: raw.data_field("filter"),
            },
        })
    }
}
