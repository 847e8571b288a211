//! Article 23-A individualized assessment: the factor catalog, questionnaire
//! draft, do-not-hire justification gate, scoring engine, and report output.

pub mod catalog;
pub mod domain;
pub mod draft;
pub(crate) mod gate;
pub mod publisher;
pub mod records;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub(crate) mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{catalog, factor, public_safety_factor, Factor, FactorId, FACTOR_COUNT};
pub use domain::{
    likert_label, CandidateId, DecisionPath, RatedFactor, RatingTone, Recommendation,
    MAX_RATING, MIN_RATING, NEUTRAL_RATING,
};
pub use draft::{AssessmentDraft, CompletedAssessment, DraftError, DraftEvent, DraftStage};
pub use gate::{apply_justification, JUSTIFICATION_MARKER};
pub use publisher::{DeliveryError, ReportDelivery, ReportPublisher};
pub use report::{
    AssessedFactor, AssessmentReport, FactorPartition, FactorSummary, IndividualizedAssessment,
    LegalReference, PolicyReference,
};
pub use records::{
    assess_records, Charge, CompanyPolicy, CriminalRecord, JurisdictionLaw, RecordAssessment,
    RecordError, RestorativeRecord, TimeBasedCriteria,
};
pub use router::{assessment_router, ShareRequest};
pub use scoring::{derive_report, ScoringConfig, ScoringEngine};
pub use service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};
pub use validation::{InvalidInputError, ValidatedRatings};
