use crate::actions::Action;
use crate::domain_models::{ThreadsCount, UserThread};
use crate::reducers::threads_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// Collapsed reply threads
    pub struct ThreadsState(Action) {
        threads: IdMap<UserThread> => threads_reducer::threads,
        /// Keyed by team id
        thread_ids_in_team: IdMap<Vec<String>> => threads_reducer::thread_ids_in_team,
        /// Keyed by team id
        counts: IdMap<ThreadsCount> => threads_reducer::counts,
    }
}
