use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// Certification as stored on a coach record
///
/// Upstream rows carry either a bare name (`"NASM-CPT"`) or a structured
/// record (`{"name": "NASM-CPT", "credential_id": "..."}`). Scoring only
/// ever looks at [`Certification::name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Certification {
    Name(String),
    Record(CertificationRecord),
}

impl Certification {
    pub fn name(&self) -> &str {
        match self {
            Certification::Name(name) => name,
            Certification::Record(record) => &record.name,
        }
    }
}

impl From<&str> for Certification {
    fn from(name: &str) -> Self {
        Certification::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub issued_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachStatus {
    Pending,
    #[default]
    Verified,
    Inactive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    #[default]
    Open,
    Closed,
}

/// Coach profile as seen by the scoring engine
///
/// Every field is optional on the wire; missing or `null` values fall back to
/// empty collections, zero, or `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub role_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CoachStatus,
    /// Null entries are dropped; numbers and other scalars become names
    #[serde(default, deserialize_with = "lenient_certifications")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_experience: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_times: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lifestyle_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub movement_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instruction_tags: Vec<String>,
    #[serde(default)]
    pub profile_completeness: Option<f64>,
    /// Naive UTC; unparseable input is dropped to `None` at deserialization
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub verified_video_url: Option<String>,
}

/// Job listing as seen by the scoring engine
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub role_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_certifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_certifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_experience: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_availability: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub culture_tags: Vec<String>,
    /// `null` or blank falls back to [`DEFAULT_PRESET`]
    #[serde(default = "default_preset", deserialize_with = "preset_or_default")]
    pub weighting_preset: String,
    /// `null` falls back to [`DEFAULT_THRESHOLD`]
    #[serde(default = "default_threshold", deserialize_with = "threshold_or_default")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub fitscore_threshold: f64,
}

impl Default for JobProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: None,
            role_type: None,
            status: JobStatus::default(),
            required_certifications: vec![],
            preferred_certifications: vec![],
            min_experience: 0,
            required_availability: vec![],
            city: String::new(),
            state: String::new(),
            culture_tags: vec![],
            weighting_preset: default_preset(),
            fitscore_threshold: default_threshold(),
        }
    }
}

pub const DEFAULT_PRESET: &str = "balanced";
pub const DEFAULT_THRESHOLD: f64 = 0.60;

fn default_preset() -> String { DEFAULT_PRESET.to_string() }
fn default_threshold() -> f64 { DEFAULT_THRESHOLD }

/// One of the six scored dimensions of a coach-job match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Certifications,
    Experience,
    Availability,
    Location,
    CulturalFit,
    Engagement,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Certifications,
        Component::Experience,
        Component::Availability,
        Component::Location,
        Component::CulturalFit,
        Component::Engagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Certifications => "certifications",
            Component::Experience => "experience",
            Component::Availability => "availability",
            Component::Location => "location",
            Component::CulturalFit => "cultural_fit",
            Component::Engagement => "engagement",
        }
    }
}

/// Per-component weights for the overall FitScore
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub certifications: f64,
    pub experience: f64,
    pub availability: f64,
    pub location: f64,
    pub cultural_fit: f64,
    pub engagement: f64,
}

impl WeightVector {
    pub fn weight(&self, component: Component) -> f64 {
        match component {
            Component::Certifications => self.certifications,
            Component::Experience => self.experience,
            Component::Availability => self.availability,
            Component::Location => self.location,
            Component::CulturalFit => self.cultural_fit,
            Component::Engagement => self.engagement,
        }
    }

    pub fn sum(&self) -> f64 {
        Component::ALL.iter().map(|c| self.weight(*c)).sum()
    }
}

/// Complete FitScore breakdown for a coach-job pair, every field rounded to 3 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub fitscore: f64,
    pub cert_score: f64,
    pub experience_score: f64,
    pub availability_score: f64,
    pub location_score: f64,
    pub culture_score: f64,
    pub engagement_score: f64,
}

impl MatchScore {
    pub fn component(&self, component: Component) -> f64 {
        match component {
            Component::Certifications => self.cert_score,
            Component::Experience => self.experience_score,
            Component::Availability => self.availability_score,
            Component::Location => self.location_score,
            Component::CulturalFit => self.culture_score,
            Component::Engagement => self.engagement_score,
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.fitscore)
    }
}

/// Coarse label for displaying a FitScore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ScoreTier::Excellent
        } else if score >= 0.6 {
            ScoreTier::Good
        } else if score >= 0.4 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into naive UTC
///
/// Zoned input (`Z` or `+hh:mm`) is shifted to UTC before the zone is dropped.
/// Naive input is taken as-is, and a bare date means midnight.
/// Returns `None` for anything it cannot read.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Some(zoned.naive_utc());
    }
    if let Ok(zoned) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(zoned.naive_utc());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn preset_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(default_preset))
}

fn threshold_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_THRESHOLD))
}

fn lenient_certifications<'de, D>(deserializer: D) -> Result<Vec<Certification>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(certification_from_value)
        .collect())
}

fn certification_from_value(value: Value) -> Option<Certification> {
    match value {
        Value::Object(fields) => {
            let text = |key: &str| fields.get(key).and_then(scalar_text);
            Some(Certification::Record(CertificationRecord {
                name: text("name").unwrap_or_default(),
                issued_date: text("issued_date"),
                expiry_date: text("expiry_date"),
                credential_id: text("credential_id"),
            }))
        }
        other => scalar_text(&other).map(Certification::Name),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
