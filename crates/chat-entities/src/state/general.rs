use crate::actions::Action;
use crate::reducers::general_reducer;

crate::combine_reducers! {
    /// Server-wide data
    pub struct GeneralState(Action) {
        supported_timezones: Vec<String> => general_reducer::supported_timezones,
    }
}
