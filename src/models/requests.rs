use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CoachProfile, JobProfile};

/// Request to score a single coach-job pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CalculateMatchRequest {
    pub coach: CoachProfile,
    #[validate(nested)]
    pub job: JobProfile,
    /// Overrides the job's configured preset when set
    #[serde(default)]
    #[validate(length(min = 1))]
    pub preset: Option<String>,
}

/// Request to rank coaches for one job
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobCandidatesRequest {
    #[validate(nested)]
    pub job: JobProfile,
    #[serde(default)]
    pub coaches: Vec<CoachProfile>,
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Request to rank jobs for one coach
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CoachMatchesRequest {
    pub coach: CoachProfile,
    #[serde(default)]
    #[validate(nested)]
    pub jobs: Vec<JobProfile>,
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Request to compute a coach's profile completeness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessRequest {
    pub coach: CoachProfile,
}
