use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    filters::{is_eligible_coach, is_eligible_job},
    presets::{get_preset, UnknownPresetError},
    scoring::calculate_match_at,
};
use crate::models::{CoachProfile, JobProfile, MatchScore};

/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 20;

/// A scored item with its 1-based position in the ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch<T> {
    pub rank: usize,
    pub fitscore: f64,
    pub score_breakdown: MatchScore,
    pub item: T,
}

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankingResult<T> {
    pub matches: Vec<RankedMatch<T>>,
    /// Items passed in, before pre-filtering and thresholding
    pub total_candidates: usize,
}

/// Batch ranking orchestrator
///
/// # Pipeline Stages
/// 1. Pre-filter (status, city/state, role type)
/// 2. FitScore per pair, using the job's preset
/// 3. Drop results below the job's threshold
/// 4. Stable sort by fitscore descending, truncate, assign ranks
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize) -> Self {
        Self {
            default_limit: default_limit.max(1),
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank coaches for a job at the current instant
    pub fn rank_candidates(
        &self,
        job: &JobProfile,
        coaches: Vec<CoachProfile>,
        limit: Option<usize>,
    ) -> Result<RankingResult<CoachProfile>, UnknownPresetError> {
        self.rank_candidates_at(job, coaches, limit, Utc::now().naive_utc())
    }

    /// Rank coaches for a job
    ///
    /// The job's preset is resolved once up front, so an unknown preset fails
    /// the whole pass before any coach is scored.
    pub fn rank_candidates_at(
        &self,
        job: &JobProfile,
        coaches: Vec<CoachProfile>,
        limit: Option<usize>,
        now: NaiveDateTime,
    ) -> Result<RankingResult<CoachProfile>, UnknownPresetError> {
        get_preset(&job.weighting_preset)?;

        let total_candidates = coaches.len();

        let scored = coaches
            .into_iter()
            .filter(|coach| is_eligible_coach(coach, job))
            .filter_map(|coach| {
                let score = calculate_match_at(&coach, job, &job.weighting_preset, now).ok()?;
                (score.fitscore >= job.fitscore_threshold).then_some((coach, score))
            })
            .collect();

        let matches = self.finish(scored, limit);

        tracing::debug!(
            "Ranked {} of {} coaches for job {} (preset: {}, threshold: {})",
            matches.len(),
            total_candidates,
            job.id,
            job.weighting_preset,
            job.fitscore_threshold
        );

        Ok(RankingResult {
            matches,
            total_candidates,
        })
    }

    /// Rank jobs for a coach at the current instant
    pub fn rank_jobs(
        &self,
        coach: &CoachProfile,
        jobs: Vec<JobProfile>,
        limit: Option<usize>,
    ) -> RankingResult<JobProfile> {
        self.rank_jobs_at(coach, jobs, limit, Utc::now().naive_utc())
    }

    /// Rank jobs for a coach
    ///
    /// Each job is scored with its own preset and filtered by its own
    /// threshold. A job with an unknown preset is skipped with a warning.
    pub fn rank_jobs_at(
        &self,
        coach: &CoachProfile,
        jobs: Vec<JobProfile>,
        limit: Option<usize>,
        now: NaiveDateTime,
    ) -> RankingResult<JobProfile> {
        let total_candidates = jobs.len();

        let scored = jobs
            .into_iter()
            .filter(|job| is_eligible_job(job, coach))
            .filter_map(|job| {
                match calculate_match_at(coach, &job, &job.weighting_preset, now) {
                    Ok(score) => (score.fitscore >= job.fitscore_threshold).then_some((job, score)),
                    Err(e) => {
                        tracing::warn!("Skipping job {} for coach {}: {}", job.id, coach.id, e);
                        None
                    }
                }
            })
            .collect();

        let matches = self.finish(scored, limit);

        tracing::debug!(
            "Ranked {} of {} jobs for coach {}",
            matches.len(),
            total_candidates,
            coach.id
        );

        RankingResult {
            matches,
            total_candidates,
        }
    }

    fn finish<T>(&self, mut scored: Vec<(T, MatchScore)>, limit: Option<usize>) -> Vec<RankedMatch<T>> {
        // Vec::sort_by is stable: equal scores keep input order
        scored.sort_by(|(_, a), (_, b)| {
            b.fitscore
                .partial_cmp(&a.fitscore)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(limit.unwrap_or(self.default_limit));

        scored
            .into_iter()
            .enumerate()
            .map(|(i, (item, score))| RankedMatch {
                rank: i + 1,
                fitscore: score.fitscore,
                score_breakdown: score,
                item,
            })
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
