use crate::actions::Action;
use crate::domain_models::Job;
use crate::reducers::jobs_reducer;
use crate::toolkit::IdMap;

crate::combine_reducers! {
    /// Server background jobs
    pub struct JobsState(Action) {
        jobs: IdMap<Job> => jobs_reducer::jobs,
        /// Keyed by job type
        jobs_by_type_list: IdMap<Vec<Job>> => jobs_reducer::jobs_by_type_list,
    }
}
