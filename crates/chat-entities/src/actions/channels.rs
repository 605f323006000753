//! Channel actions

use super::RawAction;
use crate::domain_models::Channel;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelActionType {
    ReceivedChannel,
    ReceivedChannels,
    ReceivedChannelDeleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelAction {
    ReceivedChannel(Channel),
    /// Channels of a team, fetched at `fetched_at` (ms since epoch)
    ReceivedChannels {
        team_id: String,
        channels: Vec<Channel>,
        fetched_at: i64,
    },
    /// The channel was archived
    ReceivedChannelDeleted { id: String, delete_at: i64 },
}

impl ChannelAction {
    pub fn action_type(&self) -> ChannelActionType {
        match self {
            Self::ReceivedChannel(_) => ChannelActionType::ReceivedChannel,
            Self::ReceivedChannels { .. } => ChannelActionType::ReceivedChannels,
            Self::ReceivedChannelDeleted { .. } => ChannelActionType::ReceivedChannelDeleted,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = ChannelActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            ChannelActionType::ReceivedChannel => Self::ReceivedChannel(raw.data()),
            ChannelActionType::ReceivedChannels => Self::ReceivedChannels {
                team_id: raw.field("teamId"),
                channels: raw.data(),
                fetched_at: raw.field("fetchedAt"),
            },
            ChannelActionType::ReceivedChannelDeleted => Self::ReceivedChannelDeleted {
                id: raw.data_field("id"),
                delete_at: raw.data_field("delete_at"),
            },
        })
    }
}
