//! Record-based review.
//!
//! Instead of assessor ratings, this path works from the candidate's criminal and
//! restorative records. Each charge is checked against the company's time-based
//! criteria and the jurisdiction's waiting periods, and the restorative record is
//! weighed for rehabilitation evidence. The resulting report carries no
//! individualized ratings and always recommends further review.

mod domain;
mod rules;

pub use domain::{
    Charge, CompanyPolicy, CriminalRecord, JurisdictionLaw, RecordAssessment,
    RestorativeRecord, TimeBasedCriteria,
};

use chrono::{DateTime, Utc};

use super::domain::Recommendation;
use super::report::{self, AssessmentReport, FactorPartition, LegalReference, PolicyReference};
use rules::{date_charge, restorative_efforts, time_based_criteria, waiting_periods};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("restorative record is for '{restorative}' but criminal record is for '{criminal}'")]
    CandidateMismatch { restorative: String, criminal: String },
    #[error("charge '{offense}' has an unusable date '{date}'")]
    InvalidChargeDate { offense: String, date: String },
    #[error("jurisdiction law must name a state")]
    MissingState,
}

/// Review one candidate's records. Apart from `generated_at` the output depends
/// only on the inputs.
pub fn assess_records(
    request: &RecordAssessment,
    generated_at: DateTime<Utc>,
) -> Result<AssessmentReport, RecordError> {
    let RecordAssessment {
        restorative_record,
        criminal_record,
        company_policy,
        jurisdiction_law,
        certificate_of_relief,
    } = request;

    if restorative_record.candidate_id != criminal_record.candidate_id {
        return Err(RecordError::CandidateMismatch {
            restorative: restorative_record.candidate_id.0.clone(),
            criminal: criminal_record.candidate_id.0.clone(),
        });
    }

    let state = jurisdiction_law.state.trim();
    if state.is_empty() {
        return Err(RecordError::MissingState);
    }

    let charges = criminal_record
        .charges
        .iter()
        .map(|charge| date_charge(charge, generated_at))
        .collect::<Result<Vec<_>, _>>()?;

    let timing = time_based_criteria(&charges, company_policy);
    let policy_analysis = policy_analysis(timing.strengths.len(), charges.len());

    let mut factors = FactorPartition::default();
    for findings in [
        waiting_periods(&charges, jurisdiction_law),
        restorative_efforts(restorative_record),
        timing,
    ] {
        factors.compliant.extend(
            findings
                .strengths
                .into_iter()
                .map(|finding| finding.into_summary("positive")),
        );
        factors.concerns.extend(
            findings
                .concerns
                .into_iter()
                .map(|finding| finding.into_summary("negative")),
        );
    }

    let legal_analysis = legal_analysis(
        state,
        &jurisdiction_law.mandatory_factors,
        factors.compliant.len(),
        factors.concerns.len(),
    );

    Ok(AssessmentReport {
        candidate_id: restorative_record.candidate_id.clone(),
        recommendation: Recommendation::FurtherReview,
        certificate_of_relief: *certificate_of_relief,
        factors,
        legal_analysis,
        policy_analysis,
        date_generated: report::timestamp(generated_at),
        individualized_assessment: None,
        policy_references: policy_references(),
        legal_references: legal_references(state),
    })
}

fn legal_analysis(state: &str, mandatory: &[String], compliant: usize, concerns: usize) -> String {
    let analyzed = if mandatory.is_empty() {
        "none listed".to_string()
    } else {
        mandatory.join(", ")
    };
    format!(
        "Based on {state} law requirements, the following factors have been analyzed: {analyzed}. The assessment shows compliance with {compliant} criteria and {concerns} areas requiring review."
    )
}

fn policy_analysis(met: usize, total: usize) -> String {
    format!(
        "Analysis based on company policy shows alignment with {met} out of {total} time-based criteria. Each factor has been evaluated against the company's background check matrix."
    )
}

fn policy_references() -> Vec<PolicyReference> {
    vec![
        PolicyReference {
            id: "policy-1".to_string(),
            title: "Background Check Policy".to_string(),
            section: "Time-Based Criteria".to_string(),
            url: "/policies/background-check#time-criteria".to_string(),
        },
        PolicyReference {
            id: "policy-2".to_string(),
            title: "Hiring Guidelines".to_string(),
            section: "Criminal History Assessment".to_string(),
            url: "/policies/hiring-guidelines#criminal-history".to_string(),
        },
    ]
}

fn legal_references(state: &str) -> Vec<LegalReference> {
    let slug = state
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    vec![
        LegalReference {
            id: "law-1".to_string(),
            jurisdiction: state.to_string(),
            title: "Fair Chance Act".to_string(),
            section: "Individual Assessment Requirements".to_string(),
            url: format!("/legal/{slug}/fair-chance-act#individual-assessment"),
        },
        LegalReference {
            id: "law-2".to_string(),
            jurisdiction: state.to_string(),
            title: "Employment Discrimination Laws".to_string(),
            section: "Criminal History Considerations".to_string(),
            url: format!("/legal/{slug}/employment-discrimination#criminal-history"),
        },
    ]
}
