use super::super::domain::Recommendation;
use super::config::ScoringConfig;

/// Hire is checked before reject, so the hire threshold wins if the two ever overlap.
pub(crate) fn recommend(overall_score: f64, config: &ScoringConfig) -> Recommendation {
    if overall_score >= config.hire_threshold {
        Recommendation::Hire
    } else if overall_score <= config.reject_threshold {
        Recommendation::Reject
    } else {
        Recommendation::FurtherReview
    }
}
