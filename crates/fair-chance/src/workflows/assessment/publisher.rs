use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, Recommendation};
use super::report::AssessmentReport;

/// Outbound hook for sharing finished reports (e-mail relay, HR system, ...).
pub trait ReportPublisher: Send + Sync {
    fn publish(&self, delivery: ReportDelivery) -> Result<(), DeliveryError>;
}

/// Payload handed to a publisher when an assessor shares a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDelivery {
    pub recipient: String,
    pub candidate_id: CandidateId,
    pub recommendation: Recommendation,
    pub report: AssessmentReport,
}

impl ReportDelivery {
    pub fn new(recipient: impl Into<String>, report: AssessmentReport) -> Self {
        Self {
            recipient: recipient.into(),
            candidate_id: report.candidate_id.clone(),
            recommendation: report.recommendation,
            report,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("report transport unavailable: {0}")]
    Transport(String),
}
