use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::CandidateId;

/// Evidence of rehabilitation gathered for a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorativeRecord {
    pub candidate_id: CandidateId,
    #[serde(default)]
    pub rehabilitation_efforts: Vec<String>,
    #[serde(default)]
    pub community_service: Vec<String>,
    #[serde(default)]
    pub employment_history: Vec<String>,
    #[serde(default)]
    pub character_references: Vec<String>,
    #[serde(default)]
    pub education_achievements: Vec<String>,
    #[serde(default)]
    pub time_elapsed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub offense: String,
    /// `YYYY-MM-DD` or a full RFC 3339 timestamp.
    pub date: String,
    #[serde(default)]
    pub disposition: String,
    #[serde(default)]
    pub jurisdiction: String,
}

impl Charge {
    pub fn is_felony(&self) -> bool {
        self.offense.to_lowercase().contains("felony")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriminalRecord {
    pub candidate_id: CandidateId,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

/// Minimum years since a charge, by offense class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBasedCriteria {
    pub felony: u32,
    pub misdemeanor: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPolicy {
    #[serde(default)]
    pub restricted_offenses: Vec<String>,
    pub time_based_criteria: TimeBasedCriteria,
    #[serde(default)]
    pub exempt_positions: Vec<String>,
    #[serde(default)]
    pub industry_specific_restrictions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionLaw {
    pub state: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub mandatory_factors: Vec<String>,
    /// Years to wait after a charge, keyed by offense name.
    #[serde(default)]
    pub waiting_periods: BTreeMap<String, u32>,
    #[serde(default)]
    pub protected_categories: Vec<String>,
}

impl JurisdictionLaw {
    /// Offense names match case-insensitively.
    pub fn waiting_period(&self, offense: &str) -> Option<u32> {
        let offense = offense.to_lowercase();
        self.waiting_periods
            .iter()
            .find(|(name, _)| name.to_lowercase() == offense)
            .map(|(_, years)| *years)
    }
}

/// Everything needed for a record-based review of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAssessment {
    pub restorative_record: RestorativeRecord,
    pub criminal_record: CriminalRecord,
    pub company_policy: CompanyPolicy,
    pub jurisdiction_law: JurisdictionLaw,
    #[serde(default)]
    pub certificate_of_relief: bool,
}
