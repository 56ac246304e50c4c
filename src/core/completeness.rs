use crate::models::CoachProfile;

const PROFILE_FACETS: f64 = 10.0;

/// Fraction of the ten profile facets a coach has filled in, rounded to 2 decimals
///
/// Facets: first name, last name, email, phone, bio, at least one
/// certification, at least one available time, profile photo, verified video,
/// and any lifestyle/movement/instruction tag.
pub fn calculate_profile_completeness(coach: &CoachProfile) -> f64 {
    let facets = [
        is_filled(&coach.first_name),
        is_filled(&coach.last_name),
        is_filled(&coach.email),
        is_filled(&coach.phone),
        is_filled(&coach.bio),
        !coach.certifications.is_empty(),
        !coach.available_times.is_empty(),
        is_filled(&coach.profile_photo_url),
        is_filled(&coach.verified_video_url),
        !coach.lifestyle_tags.is_empty()
            || !coach.movement_tags.is_empty()
            || !coach.instruction_tags.is_empty(),
    ];

    let completed = facets.iter().filter(|&&f| f).count() as f64;
    (completed / PROFILE_FACETS * 100.0).round() / 100.0
}

#[inline]
fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        assert_eq!(calculate_profile_completeness(&CoachProfile::default()), 0.0);
    }

    #[test]
    fn test_full_profile() {
        let coach = CoachProfile {
            first_name: Some("Dana".to_string()),
            last_name: Some("Reyes".to_string()),
            email: Some("dana@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            bio: Some("Strength coach".to_string()),
            certifications: vec!["ACE".into()],
            available_times: vec!["Mon AM".to_string()],
            profile_photo_url: Some("https://example.com/p.jpg".to_string()),
            verified_video_url: Some("https://example.com/v.mp4".to_string()),
            movement_tags: vec!["dynamic-flow".to_string()],
            ..Default::default()
        };

        assert_eq!(calculate_profile_completeness(&coach), 1.0);
    }

    #[test]
    fn test_partial_profile_ignores_blank_strings() {
        let coach = CoachProfile {
            first_name: Some("Dana".to_string()),
            last_name: Some("  ".to_string()),
            email: Some("dana@example.com".to_string()),
            instruction_tags: vec!["motivational".to_string()],
            ..Default::default()
        };

        assert_eq!(calculate_profile_completeness(&coach), 0.3);
    }
}
