use serde::{Deserialize, Serialize};

use super::catalog::FactorId;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 7;
pub const NEUTRAL_RATING: i32 = 4;

/// Opaque identifier attached to a generated report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    /// Identifier used when the assessor has not named a candidate.
    pub fn manual() -> Self {
        Self("manual-assessment".to_string())
    }
}

/// One assessor rating for a catalog factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedFactor {
    pub factor_id: FactorId,
    pub value: i32,
    #[serde(default)]
    pub notes: String,
}

impl RatedFactor {
    pub fn neutral(factor_id: FactorId) -> Self {
        Self {
            factor_id,
            value: NEUTRAL_RATING,
            notes: String::new(),
        }
    }

    pub fn is_in_range(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.value)
    }
}

/// Tri-state outcome of the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Hire,
    Reject,
    FurtherReview,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Hire => "hire",
            Recommendation::Reject => "reject",
            Recommendation::FurtherReview => "further-review",
        }
    }
}

/// Action the assessor selected when closing the questionnaire.
///
/// The selected path never changes the computed recommendation; it only
/// decides whether a written justification is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPath {
    Hire,
    DoNotHire,
    #[default]
    FurtherReview,
}

impl DecisionPath {
    pub const fn requires_justification(self) -> bool {
        matches!(self, DecisionPath::DoNotHire)
    }

    pub const fn label(self) -> &'static str {
        match self {
            DecisionPath::Hire => "hire",
            DecisionPath::DoNotHire => "do_not_hire",
            DecisionPath::FurtherReview => "further_review",
        }
    }
}

/// Seven-point Likert label; anything outside 1..=7 reads as neutral.
pub const fn likert_label(value: i32) -> &'static str {
    match value {
        1 => "Strongly Unfavorable",
        2 => "Moderately Unfavorable",
        3 => "Slightly Unfavorable",
        4 => "Neutral",
        5 => "Slightly Favorable",
        6 => "Moderately Favorable",
        7 => "Strongly Favorable",
        _ => "Neutral",
    }
}

/// Presentation hint for a single rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTone {
    Favorable,
    Neutral,
    Unfavorable,
}

impl RatingTone {
    pub fn of(value: i32) -> Self {
        match value.cmp(&NEUTRAL_RATING) {
            std::cmp::Ordering::Greater => RatingTone::Favorable,
            std::cmp::Ordering::Less => RatingTone::Unfavorable,
            std::cmp::Ordering::Equal => RatingTone::Neutral,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RatingTone::Favorable => "favorable",
            RatingTone::Neutral => "neutral",
            RatingTone::Unfavorable => "unfavorable",
        }
    }
}
