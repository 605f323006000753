use crate::actions::Action;
use crate::state::EntitiesState;
use std::sync::Arc;

/// Root reducer - applies one action to the whole entity state
///
/// A batch is unrolled and its actions applied in order, so reducing a batch
/// yields the same state as reducing its actions one by one.
pub fn reduce(state: &Arc<EntitiesState>, action: &Action) -> Arc<EntitiesState> {
    match action {
        Action::Batch(actions) => actions
            .iter()
            .fold(Arc::clone(state), |state, action| reduce(&state, action)),
        Action::Offline(_) => {
            log::debug!("Offline action reached the reducer unhandled");
            Arc::clone(state)
        }
        _ => {
            if action.is_logout() {
                log::info!("Logout: clearing per-user entities");
            }
            EntitiesState::reduce(state, action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        ChannelAction, EmojiAction, GeneralAction, JobAction, PluginAction, PreferenceAction,
        SearchAction, ThemeAction, UserAction,
    };
    use crate::domain_models::{Channel, CustomEmoji, Job, PluginStatus, Preference, Theme};
    use pretty_assertions::assert_eq;

    fn populate() -> Vec<Action> {
        vec![
            Action::Theme(ThemeAction::ReceivedThemes(vec![Theme::new("t1", "onyx")])),
            Action::Plugin(PluginAction::ReceivedPluginStatus(PluginStatus {
                plugin_id: "jira".to_string(),
                ..Default::default()
            })),
            Action::Preference(PreferenceAction::ReceivedPreferences(vec![Preference::new(
                "u1",
                "notifications",
                "email",
                "true",
            )])),
            Action::Job(JobAction::ReceivedJob(Job {
                id: "j1".to_string(),
                ..Default::default()
            })),
            Action::Search(SearchAction::SearchPostsRequest {
                is_getting_more: true,
            }),
            Action::General(GeneralAction::ReceivedSupportedTimezones(vec!["UTC".to_string()])),
            Action::Channel(ChannelAction::ReceivedChannel(Channel {
                id: "c1".to_string(),
                ..Default::default()
            })),
            Action::Emoji(EmojiAction::ReceivedCustomEmoji(CustomEmoji {
                id: "e1".to_string(),
                name: "parrot".to_string(),
                ..Default::default()
            })),
        ]
    }

    fn reduce_all(actions: &[Action]) -> Arc<EntitiesState> {
        actions
            .iter()
            .fold(Arc::default(), |state, action| reduce(&state, action))
    }

    #[test]
    fn test_unknown_action_keeps_every_reference() {
        let state = reduce_all(&populate());
        let next = reduce(&state, &Action::Unknown("NOT_A_THING".to_string()));

        assert!(Arc::ptr_eq(&state, &next));
        assert!(Arc::ptr_eq(&state.themes.themes, &next.themes.themes));
    }

    #[test]
    fn test_unrelated_slices_keep_their_reference() {
        let state = reduce_all(&populate());
        let next = reduce(
            &state,
            &Action::Theme(ThemeAction::ReceivedTheme(Theme::new("t2", "denim"))),
        );

        assert!(!Arc::ptr_eq(&state.themes, &next.themes));
        assert!(Arc::ptr_eq(&state.plugins, &next.plugins));
        assert!(Arc::ptr_eq(&state.channels.channels, &next.channels.channels));
    }

    #[test]
    fn test_batch_equals_sequential_dispatch() {
        let actions = populate();
        let sequential = reduce_all(&actions);
        let batched = reduce(&Arc::default(), &Action::Batch(actions));

        assert_eq!(*sequential, *batched);
    }

    #[test]
    fn test_received_many_twice_equals_once() {
        let actions = populate();
        let once = reduce_all(&actions);
        let twice = actions.iter().fold(Arc::clone(&once), |state, action| reduce(&state, action));

        assert_eq!(*once, *twice);
    }

    #[test]
    fn test_logout_resets_every_slice() {
        let state = reduce_all(&populate());
        assert_ne!(*state, EntitiesState::default());

        let next = reduce(&state, &Action::User(UserAction::LogoutSuccess));
        assert_eq!(*next, EntitiesState::default());

        let again = reduce(&next, &Action::User(UserAction::LogoutSuccess));
        assert!(Arc::ptr_eq(&next, &again));
    }
}
