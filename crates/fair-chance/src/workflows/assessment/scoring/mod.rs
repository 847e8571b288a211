mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;

use chrono::{DateTime, Utc};

use super::domain::{CandidateId, RatedFactor, Recommendation};
use super::report::{self, AssessmentReport, IndividualizedAssessment};
use super::validation::{InvalidInputError, ValidatedRatings};
use policy::recommend;
use rules::score_ratings;

/// Allowed drift in a reported mean after a JSON round trip.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Stateless engine that turns a complete rating set into an assessment report.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Derive a report with an explicit timestamp. Apart from `generated_at`
    /// the output depends only on the inputs.
    pub fn derive_report(
        &self,
        candidate_id: CandidateId,
        factors: &[RatedFactor],
        has_certificate: bool,
        generated_at: DateTime<Utc>,
    ) -> Result<AssessmentReport, InvalidInputError> {
        let ratings = ValidatedRatings::new(factors)?;
        let sheet = score_ratings(&ratings, &self.config);

        let recommendation = recommend(sheet.overall_score, &self.config);
        let legal_analysis = report::legal_analysis(
            sheet.partition.compliant.len(),
            sheet.partition.concerns.len(),
        );

        Ok(AssessmentReport {
            candidate_id,
            recommendation,
            certificate_of_relief: has_certificate,
            factors: sheet.partition,
            legal_analysis,
            policy_analysis: report::POLICY_ANALYSIS.to_string(),
            date_generated: report::timestamp(generated_at),
            individualized_assessment: Some(IndividualizedAssessment {
                factors: sheet.assessed,
                overall_score: sheet.overall_score,
                recommended_action: recommendation,
            }),
            policy_references: report::policy_references(),
            legal_references: report::legal_references(),
        })
    }

    /// Check that a report is exactly what this engine derives from its own
    /// detail rows. Record-based reports carry no rows and must recommend
    /// further review.
    pub fn verify_report(&self, report: &AssessmentReport) -> Result<(), InvalidInputError> {
        let Some(detail) = &report.individualized_assessment else {
            if report.recommendation != Recommendation::FurtherReview {
                return Err(InvalidInputError::InconsistentReport(
                    "record-based reports always recommend further review",
                ));
            }
            return Ok(());
        };

        if detail.recommended_action != report.recommendation {
            return Err(InvalidInputError::InconsistentReport(
                "recommended action differs from the recommendation",
            ));
        }

        let rated: Vec<RatedFactor> = detail
            .factors
            .iter()
            .map(|row| RatedFactor {
                factor_id: row.factor_id,
                value: row.rating,
                notes: row.notes.clone(),
            })
            .collect();
        let sheet = score_ratings(&ValidatedRatings::new(&rated)?, &self.config);

        if sheet.assessed != detail.factors {
            return Err(InvalidInputError::InconsistentReport(
                "factor rows do not match the catalog",
            ));
        }
        if (sheet.overall_score - detail.overall_score).abs() > SCORE_TOLERANCE {
            return Err(InvalidInputError::InconsistentReport(
                "overall score does not match the factor ratings",
            ));
        }
        if recommend(sheet.overall_score, &self.config) != report.recommendation {
            return Err(InvalidInputError::InconsistentReport(
                "recommendation does not follow from the overall score",
            ));
        }
        if sheet.partition != report.factors {
            return Err(InvalidInputError::InconsistentReport(
                "compliant and concern lists do not match the factor ratings",
            ));
        }

        Ok(())
    }
}

/// Score a manual assessment with default thresholds, stamped with the current time.
pub fn derive_report(
    factors: &[RatedFactor],
    has_certificate: bool,
) -> Result<AssessmentReport, InvalidInputError> {
    ScoringEngine::default().derive_report(
        CandidateId::manual(),
        factors,
        has_certificate,
        Utc::now(),
    )
}
