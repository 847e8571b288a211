use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::super::catalog::FactorId;
use super::super::report::FactorSummary;
use super::domain::{Charge, CompanyPolicy, JurisdictionLaw, RestorativeRecord};
use super::RecordError;

const TIME_SINCE_OFFENSE: FactorId = FactorId(4);
const REHABILITATION: FactorId = FactorId(7);

/// Character references needed before they count as a strength.
const STRONG_REFERENCE_COUNT: usize = 3;

pub(crate) struct Finding {
    factor_id: FactorId,
    factor: &'static str,
    notes: String,
}

impl Finding {
    fn new(factor_id: FactorId, factor: &'static str, notes: String) -> Self {
        Self {
            factor_id,
            factor,
            notes,
        }
    }

    pub(crate) fn into_summary(self, rating: &str) -> FactorSummary {
        FactorSummary {
            factor_id: self.factor_id,
            factor: self.factor.to_string(),
            rating: rating.to_string(),
            notes: self.notes,
            citation: format!("Article 23-A Section {}", self.factor_id),
        }
    }
}

#[derive(Default)]
pub(crate) struct Findings {
    pub strengths: Vec<Finding>,
    pub concerns: Vec<Finding>,
}

/// A charge paired with the whole calendar years since it was filed.
pub(crate) type DatedCharge<'a> = (&'a Charge, i32);

pub(crate) fn date_charge(
    charge: &Charge,
    as_of: DateTime<Utc>,
) -> Result<DatedCharge<'_>, RecordError> {
    let invalid = || RecordError::InvalidChargeDate {
        offense: charge.offense.clone(),
        date: charge.date.clone(),
    };

    let year = charge_year(&charge.date).ok_or_else(invalid)?;
    if year > as_of.year() {
        return Err(invalid());
    }
    Ok((charge, as_of.year() - year))
}

fn charge_year(date: &str) -> Option<i32> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|day| day.year())
        .or_else(|_| DateTime::parse_from_rfc3339(date).map(|stamp| stamp.year()))
        .ok()
}

pub(crate) fn waiting_periods(charges: &[DatedCharge<'_>], law: &JurisdictionLaw) -> Findings {
    let mut findings = Findings::default();

    for (charge, years) in charges {
        match law.waiting_period(&charge.offense) {
            Some(period) if i64::from(*years) < i64::from(period) => {
                findings.concerns.push(Finding::new(
                    TIME_SINCE_OFFENSE,
                    "Jurisdiction Waiting Period",
                    format!(
                        "{} does not meet the required waiting period of {period} years",
                        charge.offense
                    ),
                ));
            }
            Some(period) => {
                findings.strengths.push(Finding::new(
                    TIME_SINCE_OFFENSE,
                    "Jurisdiction Waiting Period",
                    format!(
                        "{} meets the required waiting period of {period} years",
                        charge.offense
                    ),
                ));
            }
            None => {
                findings.strengths.push(Finding::new(
                    TIME_SINCE_OFFENSE,
                    "Jurisdiction Waiting Period",
                    format!(
                        "{} has no waiting period under {} law",
                        charge.offense,
                        law.state.trim()
                    ),
                ));
            }
        }
    }

    findings
}

pub(crate) fn restorative_efforts(record: &RestorativeRecord) -> Findings {
    let mut findings = Findings::default();

    if !record.rehabilitation_efforts.is_empty() {
        findings.strengths.push(Finding::new(
            REHABILITATION,
            "Rehabilitation Efforts",
            format!(
                "Demonstrated commitment through {} rehabilitation activities",
                record.rehabilitation_efforts.len()
            ),
        ));
    }

    if !record.community_service.is_empty() {
        findings.strengths.push(Finding::new(
            REHABILITATION,
            "Community Service",
            format!(
                "Active participation in {} community service activities",
                record.community_service.len()
            ),
        ));
    }

    if record.employment_history.is_empty() {
        findings.concerns.push(Finding::new(
            REHABILITATION,
            "Employment History",
            "Limited employment history requires further review".to_string(),
        ));
    } else {
        findings.strengths.push(Finding::new(
            REHABILITATION,
            "Employment History",
            "Demonstrated stable employment history".to_string(),
        ));
    }

    if record.character_references.len() >= STRONG_REFERENCE_COUNT {
        findings.strengths.push(Finding::new(
            REHABILITATION,
            "Character References",
            format!(
                "Strong support through {} character references",
                record.character_references.len()
            ),
        ));
    }

    findings
}

/// Felony charges use the felony threshold; everything else is a misdemeanor.
pub(crate) fn time_based_criteria(
    charges: &[DatedCharge<'_>],
    policy: &CompanyPolicy,
) -> Findings {
    let mut findings = Findings::default();

    for (charge, years) in charges {
        let required = if charge.is_felony() {
            policy.time_based_criteria.felony
        } else {
            policy.time_based_criteria.misdemeanor
        };

        if i64::from(*years) >= i64::from(required) {
            findings.strengths.push(Finding::new(
                TIME_SINCE_OFFENSE,
                "Time-Based Criteria",
                format!("{}: {years} years elapsed meets requirements", charge.offense),
            ));
        } else {
            findings.concerns.push(Finding::new(
                TIME_SINCE_OFFENSE,
                "Time-Based Criteria",
                format!(
                    "{}: {years} years elapsed does not meet requirements",
                    charge.offense
                ),
            ));
        }
    }

    findings
}
