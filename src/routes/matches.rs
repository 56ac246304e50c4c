use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{calculate_match, calculate_profile_completeness, presets, validate_preset, Matcher};
use crate::models::{
    CalculateMatchRequest, CalculateMatchResponse, CoachMatchResult, CoachMatchesRequest,
    CoachMatchesResponse, CompletenessRequest, CompletenessResponse, ErrorResponse,
    HealthResponse, JobCandidateResult, JobCandidatesRequest, JobCandidatesResponse, PresetInfo,
    PresetsResponse, DEFAULT_THRESHOLD,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    /// Upper bound applied to any requested result limit
    pub max_limit: usize,
    pub default_preset: String,
}

impl AppState {
    fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested
            .map(usize::from)
            .unwrap_or_else(|| self.matcher.default_limit())
            .min(self.max_limit)
    }
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/presets", web::get().to(list_presets))
        .route("/fitscore", web::post().to(calculate_fitscore))
        .route("/jobs/candidates", web::post().to(job_candidates))
        .route("/coaches/matches", web::post().to(coach_matches))
        .route("/coaches/completeness", web::post().to(coach_completeness));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    let presets_valid = presets().iter().all(|p| validate_preset(p.name));
    let status = if presets_valid { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        presets_valid,
    })
}

/// List weighting presets
///
/// GET /api/v1/presets
async fn list_presets() -> impl Responder {
    let presets = presets()
        .iter()
        .map(|p| PresetInfo {
            name: p.name.to_string(),
            weights: p.weights,
            valid: validate_preset(p.name),
        })
        .collect();

    HttpResponse::Ok().json(PresetsResponse { presets })
}

/// Score a single coach-job pair
///
/// POST /api/v1/fitscore
///
/// Request body:
/// ```json
/// {
///   "coach": { "certifications": ["NASM-CPT"], "years_experience": 6, ... },
///   "job": { "required_certifications": ["NASM-CPT"], "min_experience": 3, ... },
///   "preset": "balanced"
/// }
/// ```
async fn calculate_fitscore(
    state: web::Data<AppState>,
    req: web::Json<CalculateMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for fitscore request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let preset = match req.preset.as_deref() {
        Some(preset) => preset,
        None if !req.job.weighting_preset.trim().is_empty() => req.job.weighting_preset.as_str(),
        None => state.default_preset.as_str(),
    };

    match calculate_match(&req.coach, &req.job, preset) {
        Ok(score) => {
            tracing::debug!(
                "Scored coach {} against job {} with {}: {}",
                req.coach.id,
                req.job.id,
                preset,
                score.fitscore
            );
            HttpResponse::Ok().json(CalculateMatchResponse {
                preset: preset.to_string(),
                score,
                tier: score.tier(),
            })
        }
        Err(e) => bad_request("Unknown preset", e.to_string()),
    }
}

/// Rank coach candidates for a job
///
/// POST /api/v1/jobs/candidates
///
/// Request body:
/// ```json
/// {
///   "job": { ... },
///   "coaches": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn job_candidates(
    state: web::Data<AppState>,
    req: web::Json<JobCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for job candidates request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let limit = state.effective_limit(req.limit);

    tracing::info!(
        "Ranking {} coaches for job {}, limit: {}",
        req.coaches.len(),
        req.job.id,
        limit
    );

    match state.matcher.rank_candidates(&req.job, req.coaches, Some(limit)) {
        Ok(result) => {
            let candidates: Vec<JobCandidateResult> =
                result.matches.into_iter().map(JobCandidateResult::from).collect();

            tracing::info!(
                "Returning {} candidates for job {} (from {} coaches)",
                candidates.len(),
                req.job.id,
                result.total_candidates
            );

            HttpResponse::Ok().json(JobCandidatesResponse {
                job_id: req.job.id,
                total_candidates: candidates.len(),
                candidates,
                threshold: req.job.fitscore_threshold,
            })
        }
        Err(e) => {
            tracing::warn!("Cannot rank candidates for job {}: {}", req.job.id, e);
            bad_request("Unknown preset", e.to_string())
        }
    }
}

/// Rank job matches for a coach
///
/// POST /api/v1/coaches/matches
///
/// Request body:
/// ```json
/// {
///   "coach": { ... },
///   "jobs": [{ ... }],
///   "limit": 20
/// }
/// ```
async fn coach_matches(
    state: web::Data<AppState>,
    req: web::Json<CoachMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for coach matches request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let limit = state.effective_limit(req.limit);

    tracing::info!(
        "Ranking {} jobs for coach {}, limit: {}",
        req.jobs.len(),
        req.coach.id,
        limit
    );

    let result = state.matcher.rank_jobs(&req.coach, req.jobs, Some(limit));
    let matches: Vec<CoachMatchResult> =
        result.matches.into_iter().map(CoachMatchResult::from).collect();

    tracing::info!(
        "Returning {} matches for coach {} (from {} jobs)",
        matches.len(),
        req.coach.id,
        result.total_candidates
    );

    HttpResponse::Ok().json(CoachMatchesResponse {
        coach_id: req.coach.id,
        total_matches: matches.len(),
        matches,
        threshold: DEFAULT_THRESHOLD,
    })
}

/// Compute profile completeness for a coach
///
/// POST /api/v1/coaches/completeness
async fn coach_completeness(req: web::Json<CompletenessRequest>) -> impl Responder {
    let coach = &req.coach;

    HttpResponse::Ok().json(CompletenessResponse {
        coach_id: coach.id.clone(),
        profile_completeness: calculate_profile_completeness(coach),
    })
}
