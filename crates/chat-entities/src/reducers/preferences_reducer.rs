use crate::actions::{Action, PreferenceAction, UserAction};
use crate::domain_models::Preference;
use crate::toolkit::keyed::{deleted_many, index_entities, received_entities, replace, reset};
use crate::toolkit::{Entity, IdMap};
use std::sync::Arc;

/// The current user's preferences keyed by `category--name`
pub fn my_preferences(prior: &Arc<IdMap<Preference>>, action: &Action) -> Arc<IdMap<Preference>> {
    match action {
        Action::Preference(PreferenceAction::ReceivedPreferences(preferences)) => {
            received_entities(prior, preferences)
        }
        Action::Preference(PreferenceAction::ReceivedAllPreferences(preferences)) => {
            replace(prior, index_entities(preferences))
        }
        Action::Preference(PreferenceAction::DeletedPreferences(preferences)) => {
            let keys: Vec<_> = preferences.iter().map(Entity::entity_key).collect();
            deleted_many(prior, keys.iter().map(|key| key.as_ref()))
        }
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::preference::categories;
    use pretty_assertions::assert_eq;

    fn pref(category: &str, name: &str, value: &str) -> Preference {
        Preference::new("u1", category, name, value)
    }

    #[test]
    fn test_received_preferences_merge() {
        let state = my_preferences(
            &Arc::default(),
            &Action::Preference(PreferenceAction::ReceivedPreferences(vec![
                pref(categories::NOTIFICATIONS, "email", "true"),
                pref(categories::NOTIFICATIONS, "desktop", "all"),
            ])),
        );
        let state = my_preferences(
            &state,
            &Action::Preference(PreferenceAction::ReceivedPreferences(vec![pref(
                categories::NOTIFICATIONS,
                "email",
                "false",
            )])),
        );

        assert_eq!(state.len(), 2);
        assert_eq!(state["notifications--email"].value, "false");
    }

    #[test]
    fn test_received_all_replaces() {
        let state = my_preferences(
            &Arc::default(),
            &Action::Preference(PreferenceAction::ReceivedPreferences(vec![pref(
                categories::THEME,
                "",
                "{}",
            )])),
        );
        let all = vec![pref(categories::DISPLAY_SETTINGS, "use_military_time", "true")];
        let state = my_preferences(
            &state,
            &Action::Preference(PreferenceAction::ReceivedAllPreferences(all.clone())),
        );
        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["display_settings--use_military_time"]);

        let same = my_preferences(
            &state,
            &Action::Preference(PreferenceAction::ReceivedAllPreferences(all)),
        );
        assert!(Arc::ptr_eq(&state, &same));
    }

    #[test]
    fn test_deleted_preferences() {
        let state = my_preferences(
            &Arc::default(),
            &Action::Preference(PreferenceAction::ReceivedPreferences(vec![
                pref(categories::NOTIFICATIONS, "email", "true"),
                pref(categories::NOTIFICATIONS, "desktop", "all"),
            ])),
        );
        let state = my_preferences(
            &state,
            &Action::Preference(PreferenceAction::DeletedPreferences(vec![pref(
                categories::NOTIFICATIONS,
                "email",
                "",
            )])),
        );
        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["notifications--desktop"]);
    }
}
