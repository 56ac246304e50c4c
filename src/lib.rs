//! FitScore - deterministic coach-job compatibility scoring
//!
//! This library scores a fitness coach against a job listing across six
//! components (certifications, experience, availability, location, cultural
//! fit, engagement) and folds them with a named weighting preset into a single
//! FitScore in [0, 1]. A batch [`Matcher`] ranks coaches for a job and jobs for
//! a coach on top of it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match, calculate_match_at, get_preset, validate_preset, Matcher, UnknownPresetError};
pub use models::{CoachProfile, JobProfile, MatchScore, WeightVector, Component};
