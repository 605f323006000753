use crate::actions::{Action, JobAction, UserAction};
use crate::domain_models::Job;
use crate::toolkit::keyed::{received_entities, received_entity, received_if_changed, reset, update_all};
use crate::toolkit::IdMap;
use std::sync::Arc;

/// Jobs keyed by job id
pub fn jobs(prior: &Arc<IdMap<Job>>, action: &Action) -> Arc<IdMap<Job>> {
    match action {
        Action::Job(JobAction::ReceivedJob(job)) => received_entity(prior, job),
        Action::Job(JobAction::ReceivedJobs(jobs)) => received_entities(prior, jobs),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}

/// Latest list of jobs per job type, newest first as sent by the server
pub fn jobs_by_type_list(prior: &Arc<IdMap<Vec<Job>>>, action: &Action) -> Arc<IdMap<Vec<Job>>> {
    match action {
        Action::Job(JobAction::ReceivedJobsByType { job_type, jobs }) => {
            received_if_changed(prior, job_type, jobs.clone())
        }
        // A single job refreshes its entry in an already listed type
        Action::Job(JobAction::ReceivedJob(job)) => update_all(prior, |job_type, listed| {
            if job_type != job.job_type {
                return;
            }
            if let Some(slot) = listed.iter_mut().find(|listed| listed.id == job.id) {
                *slot = job.clone();
            }
        }),
        Action::User(UserAction::LogoutSuccess) => reset(prior),
        _ => Arc::clone(prior),
    }
}
