use crate::actions::{Action, ThemeAction, UserAction};
use crate::domain_models::Theme;
use crate::toolkit::keyed::{deleted, received_entities, received_entity, reset};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Themes keyed by theme id
pub fn themes(prior: &Arc<IdMap<Theme>>, action: &Action) -> Arc<IdMap<Theme>> {
    match action {
        Action::Theme(ThemeAction::ReceivedTheme(theme)) => received_entity(prior, theme),
        Action::Theme(ThemeAction::ReceivedThemes(themes)) => received_entities(prior, themes),
        Action::Theme(ThemeAction::ReceivedThemeDeleted { id }) => deleted(prior, id),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn received(themes: Vec<Theme>) -> Action {
        Action::Theme(ThemeAction::ReceivedThemes(themes))
    }

    #[test]
    fn test_received_theme_is_stored_by_id() {
        let state = Arc::default();
        let next = themes(
            &state,
            &Action::Theme(ThemeAction::ReceivedTheme(Theme::new("t1", "onyx"))),
        );
        assert_eq!(next["t1"].kind, "onyx");
        assert!(state.is_empty());
    }

    #[test]
    fn test_received_many_twice_equals_once() {
        let action = received(vec![Theme::new("t1", "onyx"), Theme::new("t2", "denim")]);
        let once = themes(&Arc::default(), &action);
        let twice = themes(&once, &action);
        assert_eq!(*once, *twice);
    }

    #[test]
    fn test_deleted_removes_only_that_theme() {
        let state = themes(
            &Arc::default(),
            &received(vec![Theme::new("t1", "onyx"), Theme::new("t2", "denim")]),
        );
        let next = themes(
            &state,
            &Action::Theme(ThemeAction::ReceivedThemeDeleted { id: "t1".to_string() }),
        );
        assert_eq!(next.keys().collect::<Vec<_>>(), vec!["t2"]);

        let same = themes(
            &next,
            &Action::Theme(ThemeAction::ReceivedThemeDeleted { id: String::new() }),
        );
        assert!(Arc::ptr_eq(&next, &same));
    }

    #[test]
    fn test_unrelated_action_keeps_reference() {
        let state = themes(&Arc::default(), &received(vec![Theme::new("t1", "onyx")]));
        let next = themes(&state, &Action::Unknown("SOMETHING_ELSE".to_string()));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_logout_clears_themes() {
        let state = themes(&Arc::default(), &received(vec![Theme::new("t1", "onyx")]));
        let next = themes(&state, &Action::User(UserAction::LogoutSuccess));
        assert!(next.is_empty());
    }
}
