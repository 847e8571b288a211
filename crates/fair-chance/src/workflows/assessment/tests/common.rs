use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::assessment::catalog::{catalog, FactorId};
use crate::workflows::assessment::domain::{CandidateId, DecisionPath, RatedFactor};
use crate::workflows::assessment::publisher::{DeliveryError, ReportDelivery, ReportPublisher};
use crate::workflows::assessment::records::{
    Charge, CompanyPolicy, CriminalRecord, JurisdictionLaw, RecordAssessment, RestorativeRecord,
    TimeBasedCriteria,
};
use crate::workflows::assessment::scoring::{ScoringConfig, ScoringEngine};
use crate::workflows::assessment::service::{AssessmentService, AssessmentSubmission};

pub(super) fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn candidate() -> CandidateId {
    CandidateId("cand-1138".to_string())
}

/// One rating per catalog factor, taken in catalog order.
pub(super) fn ratings(values: [i32; 8]) -> Vec<RatedFactor> {
    catalog()
        .iter()
        .zip(values)
        .map(|(factor, value)| RatedFactor {
            factor_id: factor.id,
            value,
            notes: format!("notes for factor {}", factor.id),
        })
        .collect()
}

pub(super) fn uniform(value: i32) -> Vec<RatedFactor> {
    ratings([value; 8])
}

pub(super) fn ids(summaries: &[crate::workflows::assessment::FactorSummary]) -> Vec<FactorId> {
    summaries.iter().map(|summary| summary.factor_id).collect()
}

pub(super) fn submission(values: [i32; 8]) -> AssessmentSubmission {
    AssessmentSubmission {
        candidate_id: Some(candidate()),
        certificate_of_relief: false,
        decision: DecisionPath::FurtherReview,
        justification: None,
        factors: ratings(values),
    }
}

pub(super) fn do_not_hire_submission(justification: Option<&str>) -> AssessmentSubmission {
    AssessmentSubmission {
        decision: DecisionPath::DoNotHire,
        justification: justification.map(str::to_string),
        ..submission([2, 2, 1, 3, 4, 2, 3, 1])
    }
}

pub(super) fn charge(offense: &str, date: &str) -> Charge {
    Charge {
        offense: offense.to_string(),
        date: date.to_string(),
        disposition: "convicted".to_string(),
        jurisdiction: "NY".to_string(),
    }
}

/// A felony from 2016 and a misdemeanor from 2023, reviewed against a
/// 7-year felony and 3-year misdemeanor policy under New York law.
pub(super) fn record_assessment() -> RecordAssessment {
    RecordAssessment {
        restorative_record: RestorativeRecord {
            candidate_id: candidate(),
            rehabilitation_efforts: vec![
                "substance abuse program".to_string(),
                "anger management course".to_string(),
            ],
            community_service: vec!["food bank volunteer".to_string()],
            employment_history: Vec::new(),
            character_references: vec!["pastor".to_string(), "former employer".to_string()],
            education_achievements: vec!["GED".to_string()],
            time_elapsed: "9 years".to_string(),
        },
        criminal_record: CriminalRecord {
            candidate_id: candidate(),
            charges: vec![
                charge("Felony Theft", "2016-05-01"),
                charge("Misdemeanor Trespass", "2023-08-20"),
            ],
        },
        company_policy: CompanyPolicy {
            time_based_criteria: TimeBasedCriteria {
                felony: 7,
                misdemeanor: 3,
            },
            ..CompanyPolicy::default()
        },
        jurisdiction_law: JurisdictionLaw {
            state: "New York".to_string(),
            mandatory_factors: vec![
                "Time Since Offense".to_string(),
                "Rehabilitation".to_string(),
            ],
            waiting_periods: [("felony theft".to_string(), 5)].into_iter().collect(),
            ..JurisdictionLaw::default()
        },
        certificate_of_relief: false,
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryPublisher>, Arc<MemoryPublisher>) {
    let publisher = Arc::new(MemoryPublisher::default());
    let service = AssessmentService::new(publisher.clone(), ScoringConfig::default());
    (service, publisher)
}

#[derive(Default, Clone)]
pub(super) struct MemoryPublisher {
    deliveries: Arc<Mutex<Vec<ReportDelivery>>>,
}

impl MemoryPublisher {
    pub(super) fn deliveries(&self) -> Vec<ReportDelivery> {
        self.deliveries
            .lock()
            .expect("publisher mutex poisoned")
            .clone()
    }
}

impl ReportPublisher for MemoryPublisher {
    fn publish(&self, delivery: ReportDelivery) -> Result<(), DeliveryError> {
        self.deliveries
            .lock()
            .expect("publisher mutex poisoned")
            .push(delivery);
        Ok(())
    }
}

pub(super) struct OfflinePublisher;

impl ReportPublisher for OfflinePublisher {
    fn publish(&self, _delivery: ReportDelivery) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
