use crate::domain_models::preference::categories;
use crate::domain_models::{Preference, Theme};
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::get_preference_key;
use std::sync::Arc;

pub fn get_themes(state: &EntitiesState) -> &Arc<IdMap<Theme>> {
    &state.themes.themes
}

pub fn get_theme<'a>(state: &'a EntitiesState, id: &str) -> Option<&'a Theme> {
    state.themes.themes.get(id)
}

/// Theme chosen for `team_id`, falling back to the user's global theme.
///
/// The preference value is either the id of a stored theme or a theme
/// serialized as JSON.
pub fn get_theme_for_team(state: &EntitiesState, team_id: &str) -> Option<Theme> {
    resolve_theme(
        &state.preferences.my_preferences,
        &state.themes.themes,
        team_id,
    )
}

/// Memoized [`get_theme_for_team`], parameterized by team id
pub fn make_get_theme_for_team() -> Selector<EntitiesState, String, impl InputEq, Option<Theme>> {
    Selector::new(
        |state: &EntitiesState, team_id: &String| {
            (
                Arc::clone(&state.preferences.my_preferences),
                Arc::clone(&state.themes.themes),
                team_id.clone(),
            )
        },
        |(preferences, themes, team_id)| resolve_theme(preferences, themes, team_id),
    )
}

fn resolve_theme(
    preferences: &IdMap<Preference>,
    themes: &IdMap<Theme>,
    team_id: &str,
) -> Option<Theme> {
    let value = [team_id, ""]
        .iter()
        .filter_map(|name| preferences.get(&get_preference_key(categories::THEME, name)))
        .map(|preference| preference.value.as_str())
        .find(|value| !value.is_empty())?;

    if let Some(theme) = themes.get(value) {
        return Some(theme.clone());
    }

    match serde_json::from_str::<Theme>(value) {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("Ignoring unreadable theme preference: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, PreferenceAction, ThemeAction};
    use crate::reducers::reduce;

    fn state(preferences: Vec<Preference>) -> Arc<EntitiesState> {
        let state = reduce(
            &Arc::default(),
            &Action::Theme(ThemeAction::ReceivedThemes(vec![
                Theme::new("t1", "onyx").with_color("sidebarBg", "#000000"),
            ])),
        );
        reduce(
            &state,
            &Action::Preference(PreferenceAction::ReceivedPreferences(preferences)),
        )
    }

    #[test]
    fn test_team_theme_wins_over_global() {
        let state = state(vec![
            Preference::new("u1", categories::THEME, "", r#"{"type": "denim"}"#),
            Preference::new("u1", categories::THEME, "team1", "t1"),
        ]);

        let team = get_theme_for_team(&state, "team1").unwrap();
        assert_eq!(team.color("sidebarBg"), Some("#000000"));

        let other = get_theme_for_team(&state, "team2").unwrap();
        assert_eq!(other.kind, "denim");
    }

    #[test]
    fn test_no_theme_preference() {
        let state = state(vec![]);
        assert_eq!(get_theme_for_team(&state, "team1"), None);
        assert_eq!(get_theme(&state, "t1").map(|t| t.kind.as_str()), Some("onyx"));
    }

    #[test]
    fn test_memoized_theme_for_team() {
        let state = state(vec![Preference::new("u1", categories::THEME, "", "t1")]);
        let selector = make_get_theme_for_team();
        let team = "team1".to_string();

        let first = selector.select_with(&state, &team);
        let second = selector.select_with(&state, &team);
        assert_eq!(first, second);
        assert_eq!(selector.recomputations(), 1);

        selector.select_with(&state, &"team2".to_string());
        assert_eq!(selector.recomputations(), 2);
    }
}
