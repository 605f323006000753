use crate::domain_models::Preference;
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::{get_preference_key, strip_category};
use std::sync::Arc;

pub fn get_my_preferences(state: &EntitiesState) -> &Arc<IdMap<Preference>> {
    &state.preferences.my_preferences
}

/// Stored value of a preference, or `default_value` when it is not set
pub fn get_preference<'a>(
    state: &'a EntitiesState,
    category: &str,
    name: &str,
    default_value: &'a str,
) -> &'a str {
    state
        .preferences
        .my_preferences
        .get(&get_preference_key(category, name))
        .map(|preference| preference.value.as_str())
        .unwrap_or(default_value)
}

/// A preference read as a boolean; only `"true"` counts as true
pub fn get_bool_preference(
    state: &EntitiesState,
    category: &str,
    name: &str,
    default_value: bool,
) -> bool {
    match state
        .preferences
        .my_preferences
        .get(&get_preference_key(category, name))
    {
        Some(preference) => preference.value == "true",
        None => default_value,
    }
}

/// A preference read as an integer, `default_value` when unset or not a number
pub fn get_int_preference(
    state: &EntitiesState,
    category: &str,
    name: &str,
    default_value: i64,
) -> i64 {
    get_preference(state, category, name, "")
        .parse()
        .unwrap_or(default_value)
}

/// Every preference of one category, keyed by preference name
pub fn make_get_category(
) -> Selector<EntitiesState, String, impl InputEq, Arc<IdMap<Preference>>> {
    Selector::new(
        |state: &EntitiesState, category: &String| {
            (
                Arc::clone(&state.preferences.my_preferences),
                category.clone(),
            )
        },
        |(preferences, category)| {
            Arc::new(
                preferences
                    .iter()
                    .filter_map(|(key, preference)| {
                        strip_category(category, key)
                            .map(|name| (name.to_string(), preference.clone()))
                    })
                    .collect(),
            )
        },
    )
}
