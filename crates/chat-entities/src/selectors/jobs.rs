use crate::domain_models::{Job, JobStatus};
use crate::state::EntitiesState;
use crate::toolkit::{IdMap, InputEq, Selector};
use crate::utils::Localizer;
use std::sync::Arc;

pub fn get_jobs(state: &EntitiesState) -> &Arc<IdMap<Job>> {
    &state.jobs.jobs
}

pub fn get_job<'a>(state: &'a EntitiesState, id: &str) -> Option<&'a Job> {
    state.jobs.jobs.get(id)
}

/// Latest listed jobs of one type
pub fn make_get_jobs_by_type() -> Selector<EntitiesState, String, impl InputEq, Arc<Vec<Job>>> {
    Selector::new(
        |state: &EntitiesState, job_type: &String| {
            (Arc::clone(&state.jobs.jobs_by_type_list), job_type.clone())
        },
        |(by_type, job_type)| Arc::new(by_type.get(job_type).cloned().unwrap_or_default()),
    )
}

/// User-facing label for a job status
pub fn job_status_label(localizer: &Localizer, status: JobStatus) -> String {
    let (id, default_message) = match status {
        JobStatus::Pending => ("admin.jobTable.statusPending", "Pending"),
        JobStatus::InProgress => ("admin.jobTable.statusInProgress", "In Progress"),
        JobStatus::Success => ("admin.jobTable.statusSuccess", "Success"),
        JobStatus::Error => ("admin.jobTable.statusError", "Error"),
        JobStatus::CancelRequested => ("admin.jobTable.statusCanceling", "Canceling..."),
        JobStatus::Canceled => ("admin.jobTable.statusCanceled", "Canceled"),
        JobStatus::Warning => ("admin.jobTable.statusWarning", "Warning"),
    };
    localizer.localize(id, default_message).to_string()
}
