// Core algorithm exports
pub mod completeness;
pub mod filters;
pub mod matcher;
pub mod presets;
pub mod scoring;

pub use completeness::calculate_profile_completeness;
pub use filters::{is_eligible_coach, is_eligible_job};
pub use matcher::{Matcher, RankedMatch, RankingResult};
pub use presets::{get_preset, preset_names, presets, validate_preset, Preset, UnknownPresetError};
pub use scoring::{calculate_match, calculate_match_at, calculate_sub_scores, SubScores};
