use crate::domain_models::Channel;
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::sort::compare_locale;
use std::sync::Arc;

pub fn get_channels(state: &EntitiesState) -> &Arc<IdMap<Channel>> {
    &state.channels.channels
}

pub fn get_channel<'a>(state: &'a EntitiesState, id: &str) -> Option<&'a Channel> {
    state.channels.channels.get(id)
}

/// When the channels of a team were last fetched
pub fn get_channels_last_fetch(state: &EntitiesState, team_id: &str) -> Option<i64> {
    state.channels.channels_last_fetch.get(team_id).copied()
}

/// Channels of a team ordered by display name
pub fn make_get_channels_in_team(
) -> Selector<EntitiesState, String, impl InputEq, Arc<Vec<Channel>>> {
    Selector::new(
        |state: &EntitiesState, team_id: &String| {
            (Arc::clone(&state.channels.channels), team_id.clone())
        },
        |(channels, team_id)| {
            let mut in_team: Vec<Channel> = channels
                .values()
                .filter(|channel| channel.team_id == *team_id)
                .cloned()
                .collect();
            in_team.sort_by(|a, b| compare_locale(&a.display_name, &b.display_name));
            Arc::new(in_team)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ChannelAction};
    use crate::reducers::reduce;

    fn channel(id: &str, team_id: &str, display_name: &str) -> Channel {
        Channel {
            id: id.to_string(),
            team_id: team_id.to_string(),
            display_name: display_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_channels_in_team_sorted_by_display_name() {
        let state = reduce(
            &Arc::default(),
            &Action::Channel(ChannelAction::ReceivedChannels {
                team_id: "team1".to_string(),
                channels: vec![
                    channel("c1", "team1", "town square"),
                    channel("c2", "team1", "Off-Topic"),
                    channel("c3", "team2", "Announcements"),
                    channel("c4", "team1", "announcements"),
                ],
                fetched_at: 1700000000000,
            }),
        );

        let selector = make_get_channels_in_team();
        let channels = selector.select_with(&state, &"team1".to_string());
        let names: Vec<&str> = channels.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["announcements", "Off-Topic", "town square"]);

        assert_eq!(get_channels_last_fetch(&state, "team1"), Some(1700000000000));
        assert_eq!(get_channel(&state, "c3").map(|c| c.team_id.as_str()), Some("team2"));
    }
}
