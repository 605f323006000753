use crate::domain_models::SearchParams;
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use std::sync::Arc;

/// A search hit with the terms that matched it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultMatch {
    pub post_id: String,
    pub matches: Vec<String>,
}

pub fn get_search_results(state: &EntitiesState) -> &Arc<Vec<String>> {
    &state.search.results
}

pub fn get_search_matches(state: &EntitiesState) -> &Arc<IdMap<Vec<String>>> {
    &state.search.matches
}

pub fn get_file_search_result_ids(state: &EntitiesState) -> &Arc<Vec<String>> {
    &state.search.file_results
}

pub fn get_flagged_post_ids(state: &EntitiesState) -> &Arc<Vec<String>> {
    &state.search.flagged
}

/// Pinned post ids of a channel, empty when never loaded
pub fn get_pinned_post_ids<'a>(state: &'a EntitiesState, channel_id: &str) -> &'a [String] {
    state
        .search
        .pinned
        .get(channel_id)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn get_current_search_for_team<'a>(
    state: &'a EntitiesState,
    team_id: &str,
) -> Option<&'a SearchParams> {
    state.search.current.get(team_id)
}

pub fn is_search_getting_more(state: &EntitiesState) -> bool {
    *state.search.is_getting_more
}

/// Search results in order, each with its matched terms
pub fn make_get_search_results_with_matches(
) -> Selector<EntitiesState, (), impl InputEq, Arc<Vec<SearchResultMatch>>> {
    Selector::new(
        |state: &EntitiesState, _: &()| {
            (
                Arc::clone(&state.search.results),
                Arc::clone(&state.search.matches),
            )
        },
        |(results, matches)| {
            Arc::new(
                results
                    .iter()
                    .map(|post_id| SearchResultMatch {
                        post_id: post_id.clone(),
                        matches: matches.get(post_id).cloned().unwrap_or_default(),
                    })
                    .collect(),
            )
        },
    )
}
