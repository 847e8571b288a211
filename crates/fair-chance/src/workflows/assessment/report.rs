use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::FactorId;
use super::domain::{CandidateId, Recommendation};

pub const POLICY_ANALYSIS: &str =
    "Individual assessment completed with detailed consideration of all Article 23-A factors.";

/// Section entry used by the compliant/concern report lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorSummary {
    pub factor_id: FactorId,
    pub factor: String,
    pub rating: String,
    pub notes: String,
    #[serde(rename = "article23ASection")]
    pub citation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorPartition {
    pub compliant: Vec<FactorSummary>,
    pub concerns: Vec<FactorSummary>,
}

/// Per-factor detail row of the individualized assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedFactor {
    pub factor_id: FactorId,
    pub title: String,
    pub rating: i32,
    pub rating_label: String,
    pub notes: String,
    #[serde(rename = "article23ASection")]
    pub citation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualizedAssessment {
    pub factors: Vec<AssessedFactor>,
    pub overall_score: f64,
    pub recommended_action: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReference {
    pub id: String,
    pub title: String,
    pub section: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    pub id: String,
    pub jurisdiction: String,
    pub title: String,
    pub section: String,
    pub url: String,
}

/// Immutable result of one completed assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub candidate_id: CandidateId,
    pub recommendation: Recommendation,
    pub certificate_of_relief: bool,
    pub factors: FactorPartition,
    pub legal_analysis: String,
    pub policy_analysis: String,
    pub date_generated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individualized_assessment: Option<IndividualizedAssessment>,
    pub policy_references: Vec<PolicyReference>,
    pub legal_references: Vec<LegalReference>,
}

impl AssessmentReport {
    pub fn overall_score(&self) -> Option<f64> {
        self.individualized_assessment
            .as_ref()
            .map(|assessment| assessment.overall_score)
    }

    /// Look up a factor's detail row by id.
    pub fn assessed_factor(&self, id: FactorId) -> Option<&AssessedFactor> {
        self.individualized_assessment
            .as_ref()?
            .factors
            .iter()
            .find(|factor| factor.factor_id == id)
    }

    pub fn summary(&self) -> String {
        match self.overall_score() {
            Some(score) => format!(
                "{}: mean rating {:.2}, {} compliant, {} concern(s)",
                self.recommendation.label(),
                score,
                self.factors.compliant.len(),
                self.factors.concerns.len()
            ),
            None => format!(
                "{}: {} compliant, {} concern(s)",
                self.recommendation.label(),
                self.factors.compliant.len(),
                self.factors.concerns.len()
            ),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-03-14T15:09:26.000Z`.
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn legal_analysis(positive: usize, concerns: usize) -> String {
    format!(
        "Manual assessment conducted following Article 23-A guidelines. {positive} positive factors and {concerns} areas of concern identified."
    )
}

pub(crate) fn policy_references() -> Vec<PolicyReference> {
    vec![PolicyReference {
        id: "article-23a".to_string(),
        title: "Article 23-A".to_string(),
        section: "Individual Assessment Requirements".to_string(),
        url: "/policies/article-23a".to_string(),
    }]
}

pub(crate) fn legal_references() -> Vec<LegalReference> {
    vec![LegalReference {
        id: "ny-correction-law".to_string(),
        jurisdiction: "New York".to_string(),
        title: "NY Correction Law".to_string(),
        section: "Article 23-A".to_string(),
        url: "/legal/ny/correction-law#article-23a".to_string(),
    }]
}
