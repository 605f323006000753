use crate::actions::Action;
use crate::domain_models::CustomEmoji;
use crate::reducers::emojis_reducer;
use crate::toolkit::IdMap;
use indexmap::IndexSet;

crate::combine_reducers! {
    /// Custom emoji
    pub struct EmojisState(Action) {
        custom_emoji: IdMap<CustomEmoji> => emojis_reducer::custom_emoji,
        non_existent_emoji: IndexSet<String> => emojis_reducer::non_existent_emoji,
    }
}
