use crate::infra::{default_scoring_config, OutboxPublisher};
use crate::render::{render_catalog, render_report};
use clap::Args;
use fair_chance::config::AppConfig;
use fair_chance::error::AppError;
use fair_chance::workflows::assessment::{
    catalog, AssessmentDraft, AssessmentReport, AssessmentService, AssessmentSubmission,
    DecisionPath, DraftEvent, FactorId, RecordAssessment,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to the JSON input file
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Close the questionnaire on the do-not-hire path
    #[arg(long)]
    pub(crate) do_not_hire: bool,
    /// Justification recorded on the do-not-hire path
    #[arg(long)]
    pub(crate) justification: Option<String>,
    /// Record that the candidate presented a certificate of relief
    #[arg(long)]
    pub(crate) certificate: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn build_service(config: &AppConfig) -> AssessmentService<OutboxPublisher> {
    AssessmentService::with_candidate(
        Arc::new(OutboxPublisher::default()),
        default_scoring_config(),
        config.assessment.default_candidate_id.clone(),
    )
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.input)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)?;

    let report = build_service(&config).submit(submission)?;
    print_report(&report, args.json)
}

pub(crate) fn run_records(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.input)?;
    let request: RecordAssessment = serde_json::from_str(&raw)?;

    let report = build_service(&config).assess_records(request)?;
    print_report(&report, args.json)
}

pub(crate) fn run_factors() {
    print!("{}", render_catalog(catalog()));
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let DemoArgs {
        do_not_hire,
        justification,
        certificate,
        json,
    } = args;

    let decision = if do_not_hire {
        DecisionPath::DoNotHire
    } else {
        DecisionPath::Hire
    };

    let draft = scripted_draft(certificate, decision, justification)?;
    let completed = draft.submit(decision)?;
    let report = build_service(&config).submit_completed(completed)?;

    if !json {
        println!("Fair chance assessment demo ({} path)", decision.label());
        println!();
    }
    print_report(&report, json)
}

/// Ratings a hiring manager might give an applicant with an older, unrelated conviction.
const DEMO_RATINGS: [(i32, &str); 8] = [
    (6, "Employer participates in the state re-entry hiring program."),
    (5, "Warehouse associate; no cash handling or unsupervised site access."),
    (5, "Offense has no bearing on inventory or forklift duties."),
    (6, "Seven years since the offense with no further record."),
    (5, "Applicant was 19 at the time of the offense."),
    (3, "Felony conviction; circumstances reviewed with the applicant."),
    (6, "Completed vocational certification and two employer references."),
    (4, "Standard supervision applies to all associates."),
];

fn scripted_draft(
    certificate: bool,
    decision: DecisionPath,
    justification: Option<String>,
) -> Result<AssessmentDraft, AppError> {
    let mut events = vec![DraftEvent::Begin];

    for (index, (factor, (value, notes))) in catalog().iter().zip(DEMO_RATINGS).enumerate() {
        events.push(DraftEvent::Rate {
            factor_id: factor.id,
            value,
        });
        events.push(DraftEvent::Annotate {
            factor_id: factor.id,
            notes: notes.to_string(),
        });
        if index + 1 < catalog().len() {
            events.push(DraftEvent::Next);
        }
    }

    events.push(DraftEvent::SetCertificate {
        has_certificate: certificate,
    });

    if decision == DecisionPath::DoNotHire {
        events.push(DraftEvent::OpenDoNotHire);
        events.push(DraftEvent::EditJustification {
            text: justification.unwrap_or_default(),
        });
    }

    let draft = AssessmentDraft::new().apply_all(events)?;
    debug_assert_eq!(draft.current_factor().0.id, FactorId::PUBLIC_SAFETY);
    Ok(draft)
}

fn print_report(report: &AssessmentReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_chance::workflows::assessment::{DraftError, InvalidInputError, Recommendation};

    fn service() -> AssessmentService<OutboxPublisher> {
        AssessmentService::new(
            Arc::new(OutboxPublisher::default()),
            default_scoring_config(),
        )
    }

    #[test]
    fn scripted_draft_reaches_the_last_question() {
        let draft = scripted_draft(true, DecisionPath::FurtherReview, None).expect("draft");
        assert!(draft.is_complete());
        assert!(draft.has_certificate());
        assert_eq!(draft.factors()[3].value, 6);
    }

    #[test]
    fn demo_ratings_recommend_hire() {
        let draft = scripted_draft(false, DecisionPath::Hire, None).expect("draft");
        let completed = draft.submit(DecisionPath::Hire).expect("submits");
        let report = service().submit_completed(completed).expect("scores");

        assert_eq!(report.overall_score(), Some(5.0));
        assert_eq!(report.recommendation, Recommendation::Hire);
        assert_eq!(report.factors.concerns.len(), 1);
    }

    #[test]
    fn demo_do_not_hire_requires_justification() {
        let draft = scripted_draft(false, DecisionPath::DoNotHire, None).expect("draft");
        assert_eq!(
            draft.submit(DecisionPath::DoNotHire),
            Err(DraftError::Input(InvalidInputError::MissingJustification))
        );

        let draft = scripted_draft(
            false,
            DecisionPath::DoNotHire,
            Some("Role requires bonding the conviction prevents".to_string()),
        )
        .expect("draft");
        let completed = draft.submit(DecisionPath::DoNotHire).expect("submits");
        assert!(completed.factors[7]
            .notes
            .contains("DO NOT HIRE Justification: Role requires bonding"));
    }

    #[test]
    fn submission_files_parse_with_contract_field_names() {
        let raw = r#"{
            "candidateId": "cand-9",
            "certificateOfRelief": true,
            "decision": "do_not_hire",
            "justification": "Direct relationship to the position",
            "factors": [
                {"factorId": 1, "value": 2, "notes": ""},
                {"factorId": 2, "value": 2},
                {"factorId": 3, "value": 1},
                {"factorId": 4, "value": 3},
                {"factorId": 5, "value": 4},
                {"factorId": 6, "value": 2},
                {"factorId": 7, "value": 3},
                {"factorId": 8, "value": 1, "notes": "Access to client homes"}
            ]
        }"#;

        let submission: AssessmentSubmission = serde_json::from_str(raw).expect("parses");
        let report = service().submit(submission).expect("scores");
        assert_eq!(report.candidate_id.0, "cand-9");
        assert_eq!(report.recommendation, Recommendation::Reject);
        assert!(report.certificate_of_relief);
    }

    #[test]
    fn record_files_parse_with_contract_field_names() {
        let raw = r#"{
            "restorativeRecord": {
                "candidateId": "cand-12",
                "rehabilitationEfforts": ["job readiness program"],
                "communityService": [],
                "employmentHistory": ["line cook 2020-2024"],
                "characterReferences": ["chef", "case manager", "neighbor"],
                "educationAchievements": [],
                "timeElapsed": "8 years"
            },
            "criminalRecord": {
                "candidateId": "cand-12",
                "charges": [
                    {"offense": "Felony Burglary", "date": "2015-06-30", "disposition": "convicted", "jurisdiction": "Kings County"}
                ]
            },
            "companyPolicy": {
                "restrictedOffenses": [],
                "timeBasedCriteria": {"felony": 7, "misdemeanor": 3},
                "exemptPositions": [],
                "industrySpecificRestrictions": []
            },
            "jurisdictionLaw": {
                "state": "New York",
                "requirements": [],
                "mandatoryFactors": ["Time Since Offense"],
                "waitingPeriods": {"felony burglary": 5},
                "protectedCategories": []
            }
        }"#;

        let request: RecordAssessment = serde_json::from_str(raw).expect("parses");
        let report = service().assess_records(request).expect("records assessed");

        assert_eq!(report.candidate_id.0, "cand-12");
        assert_eq!(report.recommendation, Recommendation::FurtherReview);
        assert!(report.factors.concerns.is_empty());
        assert_eq!(report.factors.compliant.len(), 5);

        let text = render_report(&report);
        assert!(!text.contains("Overall score"));
        assert!(!text.contains("Factor ratings"));
        assert!(text.contains("- Jurisdiction Waiting Period rated positive (Article 23-A Section 4)"));
    }
}
