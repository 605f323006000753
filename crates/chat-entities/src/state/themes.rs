use crate::actions::Action;
use crate::domain_models::Theme;
use crate::reducers::themes_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// Custom themes
    pub struct ThemesState(Action) {
        themes: IdMap<Theme> => themes_reducer::themes,
    }
}
