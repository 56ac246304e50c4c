use serde::{Deserialize, Serialize};
use crate::core::matcher::RankedMatch;
use crate::models::domain::{CoachProfile, JobProfile, MatchScore, ScoreTier, WeightVector};

/// Response for the single-pair scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateMatchResponse {
    pub preset: String,
    #[serde(flatten)]
    pub score: MatchScore,
    pub tier: ScoreTier,
}

/// A job match for a coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachMatchResult {
    pub job: JobProfile,
    pub fitscore: f64,
    pub score_breakdown: MatchScore,
    pub rank: usize,
}

impl From<RankedMatch<JobProfile>> for CoachMatchResult {
    fn from(ranked: RankedMatch<JobProfile>) -> Self {
        Self {
            job: ranked.item,
            fitscore: ranked.fitscore,
            score_breakdown: ranked.score_breakdown,
            rank: ranked.rank,
        }
    }
}

/// Response with top job matches for a coach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachMatchesResponse {
    pub coach_id: String,
    pub matches: Vec<CoachMatchResult>,
    pub total_matches: usize,
    /// Default threshold, for display; each job is filtered by its own
    pub threshold: f64,
}

/// A coach candidate for a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCandidateResult {
    pub coach: CoachProfile,
    pub fitscore: f64,
    pub score_breakdown: MatchScore,
    pub rank: usize,
}

impl From<RankedMatch<CoachProfile>> for JobCandidateResult {
    fn from(ranked: RankedMatch<CoachProfile>) -> Self {
        Self {
            coach: ranked.item,
            fitscore: ranked.fitscore,
            score_breakdown: ranked.score_breakdown,
            rank: ranked.rank,
        }
    }
}

/// Response with top coach candidates for a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCandidatesResponse {
    pub job_id: String,
    pub candidates: Vec<JobCandidateResult>,
    pub total_candidates: usize,
    pub threshold: f64,
}

/// Profile completeness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessResponse {
    pub coach_id: String,
    pub profile_completeness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    pub weights: WeightVector,
    pub valid: bool,
}

/// Registered weighting presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetsResponse {
    pub presets: Vec<PresetInfo>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub presets_valid: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
