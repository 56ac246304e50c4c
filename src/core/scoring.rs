use std::collections::HashSet;

use chrono::{NaiveDateTime, Utc};

use crate::core::presets::{get_preset, UnknownPresetError};
use crate::models::{CoachProfile, Component, JobProfile, MatchScore};

/// Score for meeting every hard requirement of a gated component
const BASE_SCORE: f64 = 0.7;
/// Headroom above [`BASE_SCORE`] for bonuses
const MAX_BONUS: f64 = 0.3;
/// Years beyond the minimum that earn the full experience bonus
const EXPERIENCE_BONUS_YEARS: f64 = 10.0;
/// Extra (non-required) slots that earn the full availability bonus
const AVAILABILITY_BONUS_SLOTS: f64 = 10.0;
const COMPLETENESS_BONUS_THRESHOLD: f64 = 0.9;
const RECENT_UPDATE_DAYS: i64 = 30;

/// Unrounded component scores, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub certifications: f64,
    pub experience: f64,
    pub availability: f64,
    pub location: f64,
    pub cultural_fit: f64,
    pub engagement: f64,
}

impl SubScores {
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Certifications => self.certifications,
            Component::Experience => self.experience,
            Component::Availability => self.availability,
            Component::Location => self.location,
            Component::CulturalFit => self.cultural_fit,
            Component::Engagement => self.engagement,
        }
    }
}

/// Calculate the FitScore for a coach-job pair at the current instant
///
/// See [`calculate_match_at`].
pub fn calculate_match(
    coach: &CoachProfile,
    job: &JobProfile,
    preset: &str,
) -> Result<MatchScore, UnknownPresetError> {
    calculate_match_at(coach, job, preset, Utc::now().naive_utc())
}

/// Calculate the FitScore for a coach-job pair
///
/// Scoring formula:
/// fitscore = (
///     cert_score         * w.certifications +  # all required, bonus for preferred
///     experience_score   * w.experience +      # minimum met, bonus per extra year
///     availability_score * w.availability +    # all required slots, bonus per extra slot
///     location_score     * w.location +        # same city and state
///     culture_score      * w.cultural_fit +    # share of job culture tags covered
///     engagement_score   * w.engagement        # completeness, recency, video
/// )
///
/// `now` is the naive UTC instant the recency bonus is measured against.
/// The only failure is an unknown preset, reported before any scoring runs.
pub fn calculate_match_at(
    coach: &CoachProfile,
    job: &JobProfile,
    preset: &str,
    now: NaiveDateTime,
) -> Result<MatchScore, UnknownPresetError> {
    let weights = get_preset(preset)?;
    let scores = calculate_sub_scores(coach, job, now);

    let fitscore: f64 = Component::ALL
        .iter()
        .map(|&c| weights.weight(c) * scores.get(c))
        .sum();

    Ok(MatchScore {
        fitscore: round3(fitscore),
        cert_score: round3(scores.certifications),
        experience_score: round3(scores.experience),
        availability_score: round3(scores.availability),
        location_score: round3(scores.location),
        culture_score: round3(scores.cultural_fit),
        engagement_score: round3(scores.engagement),
    })
}

/// Evaluate all six sub-scorers without weighting or rounding
pub fn calculate_sub_scores(
    coach: &CoachProfile,
    job: &JobProfile,
    now: NaiveDateTime,
) -> SubScores {
    SubScores {
        certifications: score_certifications(coach, job),
        experience: score_experience(coach, job),
        availability: score_availability(coach, job),
        location: score_location(coach, job),
        cultural_fit: score_culture(coach, job),
        engagement: score_engagement(coach, now),
    }
}

/// Certification score (0-1)
/// Missing any required certification zeroes the score; preferred ones add up to 0.3
pub fn score_certifications(coach: &CoachProfile, job: &JobProfile) -> f64 {
    let coach_certs: HashSet<&str> = coach.certifications.iter().map(|c| c.name()).collect();
    let required = as_set(&job.required_certifications);
    let preferred = as_set(&job.preferred_certifications);

    if !required.is_subset(&coach_certs) {
        return 0.0;
    }

    let bonus = if preferred.is_empty() {
        0.0
    } else {
        let matched = preferred.intersection(&coach_certs).count() as f64;
        (matched / preferred.len() as f64) * MAX_BONUS
    };

    BASE_SCORE + bonus
}

/// Experience score (0-1)
/// Below the minimum scores 0; each year over adds 0.03 up to 10 years
pub fn score_experience(coach: &CoachProfile, job: &JobProfile) -> f64 {
    if coach.years_experience < job.min_experience {
        return 0.0;
    }

    let years_over = (coach.years_experience - job.min_experience) as f64;
    BASE_SCORE + (years_over / EXPERIENCE_BONUS_YEARS).min(MAX_BONUS)
}

/// Availability score (0-1)
/// Every required slot must be covered; extra slots add flexibility bonus
pub fn score_availability(coach: &CoachProfile, job: &JobProfile) -> f64 {
    let coach_slots = as_set(&coach.available_times);
    let required = as_set(&job.required_availability);

    if !required.is_subset(&coach_slots) {
        return 0.0;
    }

    let extra_slots = coach_slots.difference(&required).count() as f64;
    BASE_SCORE + (extra_slots / AVAILABILITY_BONUS_SLOTS).min(1.0) * MAX_BONUS
}

/// Location score (0 or 1)
/// Binary: same city (case-insensitive, trimmed) and same state code
pub fn score_location(coach: &CoachProfile, job: &JobProfile) -> f64 {
    if same_location(&coach.city, &coach.state, &job.city, &job.state) {
        1.0
    } else {
        0.0
    }
}

/// Culture score (0-1)
/// Share of the job's culture tags found among the coach's tags
#[inline]
pub fn score_culture(coach: &CoachProfile, job: &JobProfile) -> f64 {
    let job_tags = as_set(&job.culture_tags);
    if job_tags.is_empty() {
        return 1.0;
    }

    let coach_tags: HashSet<&str> = coach
        .lifestyle_tags
        .iter()
        .chain(&coach.movement_tags)
        .chain(&coach.instruction_tags)
        .map(String::as_str)
        .collect();

    job_tags.intersection(&coach_tags).count() as f64 / job_tags.len() as f64
}

/// Engagement score (0.5-1)
///
/// Base 0.5, +0.2 for completeness >= 90%, +0.2 for an update within 30 days
/// of `now`, +0.1 for a verified video. Counted in tenths.
pub fn score_engagement(coach: &CoachProfile, now: NaiveDateTime) -> f64 {
    let mut tenths: u8 = 5;

    if coach
        .profile_completeness
        .is_some_and(|c| c >= COMPLETENESS_BONUS_THRESHOLD)
    {
        tenths += 2;
    }

    if let Some(updated) = coach.last_updated {
        if (now - updated).num_days() <= RECENT_UPDATE_DAYS {
            tenths += 2;
        }
    }

    if coach
        .verified_video_url
        .as_deref()
        .is_some_and(|url| !url.trim().is_empty())
    {
        tenths += 1;
    }

    // Bonuses top out at exactly 10 tenths; the clamp holds the 1.0 ceiling
    f64::from(tenths.min(10)) / 10.0
}

/// City compared trimmed and lowercased, state code trimmed and uppercased
pub fn same_location(city_a: &str, state_a: &str, city_b: &str, state_b: &str) -> bool {
    city_a.trim().to_lowercase() == city_b.trim().to_lowercase()
        && state_a.trim().to_uppercase() == state_b.trim().to_uppercase()
}

#[inline]
fn as_set(values: &[String]) -> HashSet<&str> {
    values.iter().map(String::as_str).collect()
}

#[inline]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
