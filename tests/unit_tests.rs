// Unit tests for FitScore

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fitscore::core::{
    presets::{get_preset, presets, validate_preset},
    scoring::{
        calculate_match_at, score_availability, score_certifications, score_culture,
        score_engagement, score_experience, score_location,
    },
};
use fitscore::models::{Certification, CertificationRecord, CoachProfile, JobProfile};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn record(name: &str) -> Certification {
    Certification::Record(CertificationRecord {
        name: name.to_string(),
        ..Default::default()
    })
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_presets_sum_to_one() {
    for preset in presets() {
        let total = preset.weights.sum();
        assert!((total - 1.0).abs() < 0.001, "Preset '{}' sums to {}", preset.name, total);
    }
    assert_eq!(presets().len(), 4);
}

#[test]
fn test_unknown_preset_name() {
    let err = get_preset("invalid_preset_name").unwrap_err();
    assert_eq!(err.name, "invalid_preset_name");
    assert!(err.available.contains(&"availability_focused".to_string()));

    assert!(!validate_preset("invalid_preset_name"));
    assert!(validate_preset("balanced"));
    assert!(validate_preset("experience_heavy"));
}

#[test]
fn test_missing_required_certification() {
    let coach = CoachProfile {
        certifications: vec![record("ACE"), record("RYT-200")],
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT", "ACE"]),
        preferred_certifications: strings(&["RYT-200"]),
        ..Default::default()
    };

    assert_eq!(score_certifications(&coach, &job), 0.0);
}

#[test]
fn test_exact_required_certifications() {
    let coach = CoachProfile {
        certifications: vec![record("NASM-CPT"), "ACE".into()],
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT", "ACE"]),
        ..Default::default()
    };

    assert_close(score_certifications(&coach, &job), 0.7);
}

#[test]
fn test_all_preferred_certifications() {
    let coach = CoachProfile {
        certifications: vec![record("NASM-CPT"), record("RYT-200")],
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT"]),
        preferred_certifications: strings(&["RYT-200"]),
        ..Default::default()
    };

    assert_close(score_certifications(&coach, &job), 1.0);
}

#[test]
fn test_half_preferred_certifications() {
    let coach = CoachProfile {
        certifications: vec!["NASM-CPT".into(), "ACE".into()],
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT"]),
        preferred_certifications: strings(&["ACE", "RYT-200"]),
        ..Default::default()
    };

    assert_close(score_certifications(&coach, &job), 0.85);
}

#[test]
fn test_experience_gates_and_cap() {
    let job = JobProfile {
        min_experience: 3,
        ..Default::default()
    };
    let coach = |years| CoachProfile {
        years_experience: years,
        ..Default::default()
    };

    assert_eq!(score_experience(&coach(2), &job), 0.0);
    assert_close(score_experience(&coach(3), &job), 0.7);
    assert_close(score_experience(&coach(13), &job), 1.0);
    assert_close(score_experience(&coach(40), &job), 1.0);
}

#[test]
fn test_availability_missing_slot() {
    let coach = CoachProfile {
        available_times: strings(&["Mon AM", "Wed PM"]),
        ..Default::default()
    };
    let job = JobProfile {
        required_availability: strings(&["Mon AM", "Fri AM", "Sat AM"]),
        ..Default::default()
    };

    assert_eq!(score_availability(&coach, &job), 0.0);
}

#[test]
fn test_availability_exact_and_extra_slots() {
    let job = JobProfile {
        required_availability: strings(&["Mon AM", "Fri AM"]),
        ..Default::default()
    };

    let exact = CoachProfile {
        available_times: strings(&["Fri AM", "Mon AM"]),
        ..Default::default()
    };
    assert_close(score_availability(&exact, &job), 0.7);

    let flexible = CoachProfile {
        available_times: strings(&[
            "Mon AM", "Mon PM", "Tue AM", "Wed AM", "Thu AM", "Fri AM", "Sat AM",
        ]),
        ..Default::default()
    };
    assert_close(score_availability(&flexible, &job), 0.85);
}

#[test]
fn test_location_matching() {
    let job = JobProfile {
        city: "New York".to_string(),
        state: "NY".to_string(),
        ..Default::default()
    };
    let coach = |city: &str, state: &str| CoachProfile {
        city: city.to_string(),
        state: state.to_string(),
        ..Default::default()
    };

    assert_eq!(score_location(&coach("New York", "NY"), &job), 1.0);
    assert_eq!(score_location(&coach("new york", "NY"), &job), 1.0);
    assert_eq!(score_location(&coach("Boston", "MA"), &job), 0.0);
    assert_eq!(score_location(&coach("New York", "NJ"), &job), 0.0);
}

#[test]
fn test_culture_scoring() {
    let coach = CoachProfile {
        lifestyle_tags: strings(&["wellness"]),
        ..Default::default()
    };

    let no_tags = JobProfile::default();
    assert_eq!(score_culture(&coach, &no_tags), 1.0);

    let job = JobProfile {
        culture_tags: strings(&["wellness", "community", "high-energy"]),
        ..Default::default()
    };
    assert_close(score_culture(&coach, &job), 1.0 / 3.0);

    let unrelated = CoachProfile {
        lifestyle_tags: strings(&["technical-precision"]),
        ..Default::default()
    };
    assert_eq!(score_culture(&unrelated, &job), 0.0);
}

#[test]
fn test_engagement_minimum() {
    let coach = CoachProfile {
        profile_completeness: Some(0.5),
        last_updated: Some(now() - Duration::days(60)),
        verified_video_url: None,
        ..Default::default()
    };

    assert_close(score_engagement(&coach, now()), 0.5);
    assert_close(score_engagement(&CoachProfile::default(), now()), 0.5);
}

#[test]
fn test_engagement_individual_bonuses() {
    let complete = CoachProfile {
        profile_completeness: Some(0.95),
        ..Default::default()
    };
    assert_close(score_engagement(&complete, now()), 0.7);

    let recent = CoachProfile {
        last_updated: Some(now() - Duration::days(15)),
        ..Default::default()
    };
    assert_close(score_engagement(&recent, now()), 0.7);

    let video = CoachProfile {
        verified_video_url: Some("https://example.com/video.mp4".to_string()),
        ..Default::default()
    };
    assert_close(score_engagement(&video, now()), 0.6);
}

#[test]
fn test_engagement_maximum_is_clamped() {
    let coach = CoachProfile {
        profile_completeness: Some(1.0),
        last_updated: Some(now()),
        verified_video_url: Some("https://example.com/video.mp4".to_string()),
        ..Default::default()
    };

    assert_eq!(score_engagement(&coach, now()), 1.0);
}

fn perfect_pair() -> (CoachProfile, JobProfile) {
    let coach = CoachProfile {
        certifications: vec![record("NASM-CPT"), record("ACE")],
        years_experience: 15,
        available_times: strings(&["Mon AM", "Wed PM", "Fri AM", "Sat AM", "Sun AM"]),
        city: "New York".to_string(),
        state: "NY".to_string(),
        lifestyle_tags: strings(&["wellness", "community", "high-energy"]),
        profile_completeness: Some(1.0),
        last_updated: Some(now()),
        verified_video_url: Some("https://example.com/video.mp4".to_string()),
        ..Default::default()
    };

    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT"]),
        preferred_certifications: strings(&["ACE"]),
        min_experience: 5,
        required_availability: strings(&["Mon AM", "Fri AM"]),
        city: "New York".to_string(),
        state: "NY".to_string(),
        culture_tags: strings(&["wellness", "community"]),
        ..Default::default()
    };

    (coach, job)
}

#[test]
fn test_perfect_match() {
    let (coach, job) = perfect_pair();
    let result = calculate_match_at(&coach, &job, "balanced", now()).unwrap();

    assert!(result.fitscore >= 0.95, "fitscore was {}", result.fitscore);
    assert_eq!(result.cert_score, 1.0);
    assert_eq!(result.experience_score, 1.0);
    assert_eq!(result.location_score, 1.0);
    assert_eq!(result.culture_score, 1.0);
    assert_eq!(result.engagement_score, 1.0);
    assert_eq!(result.availability_score, 0.79);
}

#[test]
fn test_poor_match() {
    let coach = CoachProfile {
        certifications: vec![record("RYT-200")],
        years_experience: 1,
        available_times: strings(&["Tue PM"]),
        city: "Boston".to_string(),
        state: "MA".to_string(),
        lifestyle_tags: strings(&["technical-precision"]),
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT"]),
        min_experience: 5,
        required_availability: strings(&["Mon AM", "Fri AM"]),
        city: "New York".to_string(),
        state: "NY".to_string(),
        culture_tags: strings(&["high-energy", "community"]),
        ..Default::default()
    };

    let result = calculate_match_at(&coach, &job, "balanced", now()).unwrap();

    assert!(result.fitscore < 0.2);
    assert_eq!(result.cert_score, 0.0);
    assert_eq!(result.experience_score, 0.0);
    assert_eq!(result.availability_score, 0.0);
    assert_eq!(result.location_score, 0.0);
    assert_eq!(result.culture_score, 0.0);
    assert_eq!(result.fitscore, 0.05);
}

#[test]
fn test_different_presets_produce_different_scores() {
    let coach = CoachProfile {
        certifications: vec![record("NASM-CPT")],
        years_experience: 10,
        available_times: strings(&["Mon AM", "Fri AM"]),
        city: "New York".to_string(),
        state: "NY".to_string(),
        lifestyle_tags: strings(&["wellness", "community"]),
        ..Default::default()
    };
    let job = JobProfile {
        required_certifications: strings(&["NASM-CPT"]),
        min_experience: 3,
        required_availability: strings(&["Mon AM"]),
        city: "New York".to_string(),
        state: "NY".to_string(),
        culture_tags: strings(&["wellness"]),
        ..Default::default()
    };

    let balanced = calculate_match_at(&coach, &job, "balanced", now()).unwrap();
    let experience_heavy = calculate_match_at(&coach, &job, "experience_heavy", now()).unwrap();
    let culture_heavy = calculate_match_at(&coach, &job, "culture_heavy", now()).unwrap();

    assert_ne!(balanced.fitscore, experience_heavy.fitscore);
    assert_ne!(balanced.fitscore, culture_heavy.fitscore);
    // Sub-scores do not depend on the preset
    assert_eq!(balanced.cert_score, experience_heavy.cert_score);
    assert_eq!(balanced.engagement_score, culture_heavy.engagement_score);
}

#[test]
fn test_calculate_match_is_idempotent() {
    let (coach, job) = perfect_pair();

    let first = calculate_match_at(&coach, &job, "culture_heavy", now()).unwrap();
    let second = calculate_match_at(&coach, &job, "culture_heavy", now()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fitscore.to_bits(), second.fitscore.to_bits());
}

#[test]
fn test_scoring_from_json_records() {
    let coach: CoachProfile = serde_json::from_str(
        r#"{
            "certifications": [{"name": "NASM-CPT", "credential_id": "123"}, "ACE"],
            "years_experience": 5,
            "available_times": ["Mon AM", "Fri AM"],
            "city": "Denver",
            "state": "co",
            "lifestyle_tags": ["wellness"],
            "movement_tags": null,
            "profile_completeness": 0.92,
            "last_updated": "2025-03-01T08:00:00Z",
            "verified_video_url": ""
        }"#,
    )
    .unwrap();
    let job: JobProfile = serde_json::from_str(
        r#"{
            "required_certifications": ["ACE"],
            "min_experience": 5,
            "required_availability": ["Mon AM", "Fri AM"],
            "city": "Denver",
            "state": "CO",
            "culture_tags": ["wellness", "community"]
        }"#,
    )
    .unwrap();

    let result = calculate_match_at(&coach, &job, &job.weighting_preset, now()).unwrap();

    assert_eq!(result.cert_score, 0.7);
    assert_eq!(result.experience_score, 0.7);
    assert_eq!(result.availability_score, 0.7);
    assert_eq!(result.location_score, 1.0);
    assert_eq!(result.culture_score, 0.5);
    assert_eq!(result.engagement_score, 0.9);
}
