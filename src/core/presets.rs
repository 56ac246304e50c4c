use thiserror::Error;
use crate::models::WeightVector;

/// Allowed deviation of a preset's weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Returned when a preset name is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown preset '{name}'. Available: {}", .available.join(", "))]
pub struct UnknownPresetError {
    pub name: String,
    pub available: Vec<String>,
}

/// A named weight vector
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub weights: WeightVector,
}

static PRESETS: [Preset; 4] = [
    Preset {
        name: "balanced",
        weights: WeightVector {
            certifications: 0.25,
            experience: 0.20,
            availability: 0.15,
            location: 0.15,
            cultural_fit: 0.15,
            engagement: 0.10,
        },
    },
    Preset {
        name: "experience_heavy",
        weights: WeightVector {
            certifications: 0.20,
            experience: 0.35,
            availability: 0.10,
            location: 0.10,
            cultural_fit: 0.15,
            engagement: 0.10,
        },
    },
    Preset {
        name: "culture_heavy",
        weights: WeightVector {
            certifications: 0.15,
            experience: 0.15,
            availability: 0.10,
            location: 0.10,
            cultural_fit: 0.40,
            engagement: 0.10,
        },
    },
    Preset {
        name: "availability_focused",
        weights: WeightVector {
            certifications: 0.20,
            experience: 0.15,
            availability: 0.35,
            location: 0.10,
            cultural_fit: 0.10,
            engagement: 0.10,
        },
    },
];

/// All built-in presets, in registration order
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Look up a preset's weights by exact name
pub fn get_preset(name: &str) -> Result<&'static WeightVector, UnknownPresetError> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| &p.weights)
        .ok_or_else(|| UnknownPresetError {
            name: name.to_string(),
            available: preset_names().into_iter().map(String::from).collect(),
        })
}

/// Check that `name` is registered and its weights sum to 1.0
///
/// Registry integrity check for startup and tests. Never fails; an unknown
/// name is simply invalid.
pub fn validate_preset(name: &str) -> bool {
    match get_preset(name) {
        Ok(weights) => (weights.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE,
        Err(_) => false,
    }
}
