use crate::actions::Action;
use crate::domain_models::SearchParams;
use crate::reducers::search_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// Post and file search
    pub struct SearchState(Action) {
        results: Vec<String> => search_reducer::results,
        file_results: Vec<String> => search_reducer::file_results,
        flagged: Vec<String> => search_reducer::flagged,
        /// Keyed by channel id
        pinned: IdMap<Vec<String>> => search_reducer::pinned,
        /// Keyed by post id
        matches: IdMap<Vec<String>> => search_reducer::matches,
        /// Keyed by team id
        current: IdMap<SearchParams> => search_reducer::current,
        is_getting_more: bool => search_reducer::is_getting_more,
    }
}
