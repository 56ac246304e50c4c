// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    parse_timestamp, Certification, CertificationRecord, CoachProfile, CoachStatus, Component,
    JobProfile, JobStatus, MatchScore, ScoreTier, WeightVector, DEFAULT_PRESET, DEFAULT_THRESHOLD,
};
pub use requests::{CalculateMatchRequest, CoachMatchesRequest, CompletenessRequest, JobCandidatesRequest};
pub use responses::{
    CalculateMatchResponse, CoachMatchResult, CoachMatchesResponse, CompletenessResponse,
    ErrorResponse, HealthResponse, JobCandidateResult, JobCandidatesResponse, PresetInfo,
    PresetsResponse,
};
