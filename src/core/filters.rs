use crate::core::scoring::same_location;
use crate::models::{CoachProfile, CoachStatus, JobProfile, JobStatus};

/// Check if a coach is a candidate for a job
///
/// Pre-filter applied before scoring to bound the candidate set: the coach
/// must be verified, in the job's city and state, and (when the job names
/// one) in the job's role type.
#[inline]
pub fn is_eligible_coach(coach: &CoachProfile, job: &JobProfile) -> bool {
    if coach.status != CoachStatus::Verified {
        return false;
    }

    if !same_location(&coach.city, &coach.state, &job.city, &job.state) {
        return false;
    }

    match job.role_type.as_deref() {
        Some(role) => coach.role_type.as_deref() == Some(role),
        None => true,
    }
}

/// Check if a job should be offered to a coach
///
/// Only open jobs in the coach's city and state are considered.
#[inline]
pub fn is_eligible_job(job: &JobProfile, coach: &CoachProfile) -> bool {
    job.status == JobStatus::Open
        && same_location(&job.city, &job.state, &coach.city, &coach.state)
}
