use crate::actions::{Action, ChannelAction, UserAction};
use crate::domain_models::Channel;
use crate::toolkit::keyed::{received_entities, received_entity, received_if_changed, reset, update_in};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Channels keyed by channel id
pub fn channels(prior: &Arc<IdMap<Channel>>, action: &Action) -> Arc<IdMap<Channel>> {
    match action {
        Action::Channel(ChannelAction::ReceivedChannel(channel)) => received_entity(prior, channel),
        Action::Channel(ChannelAction::ReceivedChannels { channels, .. }) => {
            received_entities(prior, channels)
        }
        // Archived channels stay visible, only their delete time changes
        Action::Channel(ChannelAction::ReceivedChannelDeleted { id, delete_at }) => {
            update_in(prior, id, |channel| channel.delete_at = *delete_at)
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// When the channel list of each team was last fetched, in ms since epoch
pub fn channels_last_fetch(prior: &Arc<IdMap<i64>>, action: &Action) -> Arc<IdMap<i64>> {
    match action {
        Action::Channel(ChannelAction::ReceivedChannels {
            team_id,
            fetched_at,
            ..
        }) if *fetched_at > 0 => received_if_changed(prior, team_id, *fetched_at),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}
