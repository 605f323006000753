//! Job actions

use super::RawAction;
use crate::domain_models::Job;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobActionType {
    ReceivedJob,
    ReceivedJobs,
    ReceivedJobsByType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobAction {
    ReceivedJob(Job),
    ReceivedJobs(Vec<Job>),
    /// Latest page of jobs of one type, replaces the stored list for it
    ReceivedJobsByType { job_type: String, jobs: Vec<Job> },
}

impl JobAction {
    pub fn action_type(&self) -> JobActionType {
        match self {
            Self::ReceivedJob(_) => JobActionType::ReceivedJob,
            Self::ReceivedJobs(_) => JobActionType::ReceivedJobs,
            Self::ReceivedJobsByType { .. } => JobActionType::ReceivedJobsByType,
        }
    }

    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let action_type = JobActionType::from_str(&raw.kind).ok()?;
        Some(match action_type {
            JobActionType::ReceivedJob => Self::ReceivedJob(raw.data()),
            JobActionType::ReceivedJobs => Self::ReceivedJobs(raw.data()),
            JobActionType::ReceivedJobsByType => {
                let jobs: Vec<Job> = raw.data();
                // Older servers omit the type; fall back to the first job's
                let mut job_type: String = raw.field("jobType");
                if job_type.is_empty() {
                    job_type = jobs.first().map(|job| job.job_type.clone()).unwrap_or_default();
                }
                Self::ReceivedJobsByType { job_type, jobs }
            }
        })
    }
}
