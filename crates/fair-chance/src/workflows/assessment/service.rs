use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::catalog::{self, Factor, FACTOR_COUNT};
use super::domain::{CandidateId, DecisionPath, RatedFactor};
use super::draft::CompletedAssessment;
use super::gate::apply_justification;
use super::publisher::{DeliveryError, ReportDelivery, ReportPublisher};
use super::records::{assess_records, RecordAssessment, RecordError};
use super::report::AssessmentReport;
use super::scoring::{ScoringConfig, ScoringEngine};
use super::validation::InvalidInputError;

/// Inbound assessment payload from the rating capture surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub candidate_id: Option<CandidateId>,
    #[serde(default)]
    pub certificate_of_relief: bool,
    #[serde(default)]
    pub decision: DecisionPath,
    #[serde(default)]
    pub justification: Option<String>,
    pub factors: Vec<RatedFactor>,
}

/// Facade composing the justification gate, scoring engine, and report publisher.
pub struct AssessmentService<P> {
    engine: ScoringEngine,
    publisher: Arc<P>,
    default_candidate: CandidateId,
}

impl<P> AssessmentService<P>
where
    P: ReportPublisher + 'static,
{
    pub fn new(publisher: Arc<P>, config: ScoringConfig) -> Self {
        Self::with_candidate(publisher, config, CandidateId::manual())
    }

    pub fn with_candidate(
        publisher: Arc<P>,
        config: ScoringConfig,
        default_candidate: CandidateId,
    ) -> Self {
        Self {
            engine: ScoringEngine::new(config),
            publisher,
            default_candidate,
        }
    }

    pub fn catalog(&self) -> &'static [Factor; FACTOR_COUNT] {
        catalog::catalog()
    }

    /// Gate, validate, and score a submission into a fresh report.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let AssessmentSubmission {
            candidate_id,
            certificate_of_relief,
            decision,
            justification,
            factors,
        } = submission;

        let factors = apply_justification(factors, decision, justification.as_deref())?;
        self.score(candidate_id, &factors, certificate_of_relief, decision)
    }

    /// Score an assessment closed through the questionnaire draft, which has
    /// already passed the justification gate.
    pub fn submit_completed(
        &self,
        completed: CompletedAssessment,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        self.score(
            None,
            &completed.factors,
            completed.has_certificate,
            completed.decision,
        )
    }

    fn score(
        &self,
        candidate_id: Option<CandidateId>,
        factors: &[RatedFactor],
        has_certificate: bool,
        decision: DecisionPath,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let candidate_id = candidate_id.unwrap_or_else(|| self.default_candidate.clone());
        let report = self
            .engine
            .derive_report(candidate_id, factors, has_certificate, Utc::now())?;

        info!(
            candidate = %report.candidate_id.0,
            decision = decision.label(),
            recommendation = report.recommendation.label(),
            overall_score = report.overall_score().unwrap_or_default(),
            "assessment report generated"
        );

        Ok(report)
    }

    /// Review a candidate's criminal and restorative records against company
    /// policy and jurisdiction law.
    pub fn assess_records(
        &self,
        request: RecordAssessment,
    ) -> Result<AssessmentReport, AssessmentServiceError> {
        let report = assess_records(&request, Utc::now())?;

        info!(
            candidate = %report.candidate_id.0,
            charges = request.criminal_record.charges.len(),
            compliant = report.factors.compliant.len(),
            concerns = report.factors.concerns.len(),
            "record-based report generated"
        );

        Ok(report)
    }

    /// Hand a finished report to the outbound publisher. Reports that do not
    /// match what the engine would derive are refused.
    pub fn share(
        &self,
        report: AssessmentReport,
        recipient: &str,
    ) -> Result<(), AssessmentServiceError> {
        let recipient = recipient.trim();
        if !is_plausible_email(recipient) {
            return Err(AssessmentServiceError::InvalidRecipient(recipient.to_string()));
        }
        self.engine.verify_report(&report)?;

        let delivery = ReportDelivery::new(recipient, report);
        let candidate = delivery.candidate_id.0.clone();
        if let Err(err) = self.publisher.publish(delivery) {
            warn!(%candidate, error = %err, "report delivery failed");
            return Err(err.into());
        }

        info!(%candidate, "assessment report shared");
        Ok(())
    }
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("'{0}' is not a valid recipient e-mail address")]
    InvalidRecipient(String),
    #[error(transparent)]
    Records(#[from] RecordError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}
