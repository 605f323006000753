use crate::actions::{Action, GeneralAction, UserAction};
use crate::toolkit::keyed::{replace, reset};
use std::sync::Arc;

/// Timezones the server knows about
pub fn supported_timezones(prior: &Arc<Vec<String>>, action: &Action) -> Arc<Vec<String>> {
    match action {
        Action::General(GeneralAction::ReceivedSupportedTimezones(timezones)) => {
            replace(prior, timezones.clone())
        }
        // Reloaded on the next login
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_timezones() {
        let action = Action::General(GeneralAction::ReceivedSupportedTimezones(vec![
            "UTC".to_string(),
            "Europe/Berlin".to_string(),
        ]));
        let state = supported_timezones(&Arc::default(), &action);
        assert_eq!(state.len(), 2);
        assert!(Arc::ptr_eq(&state, &supported_timezones(&state, &action)));
        assert!(supported_timezones(&state, &Action::User(UserAction::LogoutSuccess)).is_empty());
    }
}
