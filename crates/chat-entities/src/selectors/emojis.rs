use crate::domain_models::CustomEmoji;
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::sort::ids_sorted_by_name;
use std::sync::Arc;

pub fn get_custom_emojis(state: &EntitiesState) -> &Arc<IdMap<CustomEmoji>> {
    &state.emojis.custom_emoji
}

/// Whether a name is already known not to exist on the server
pub fn is_non_existent_emoji(state: &EntitiesState, name: &str) -> bool {
    state.emojis.non_existent_emoji.contains(name)
}

/// Custom emoji ids ordered by emoji name
pub fn make_get_custom_emoji_ids_sorted_by_name(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<String>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| Arc::clone(&state.emojis.custom_emoji),
        |emojis| {
            Arc::new(ids_sorted_by_name(emojis.iter(), |emoji| emoji.name.as_str()))
        },
    )
}

/// Custom emoji keyed by name
pub fn make_get_custom_emojis_by_name(
) -> Selector<EntitiesState, (), impl InputEq, Arc<IdMap<CustomEmoji>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| Arc::clone(&state.emojis.custom_emoji),
        |emojis| {
            Arc::new(
                emojis
                    .values()
                    .map(|emoji| (emoji.name.clone(), emoji.clone()))
                    .collect(),
            )
        },
    )
}
