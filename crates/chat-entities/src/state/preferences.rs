use crate::actions::Action;
use crate::domain_models::Preference;
use crate::reducers::preferences_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    pub struct PreferencesState(Action) {
        /// Keyed by `category--name`
        my_preferences: IdMap<Preference> => preferences_reducer::my_preferences,
    }
}
