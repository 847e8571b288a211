use serde::{Deserialize, Serialize};

/// Stable identifier for one of the eight Article 23-A factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorId(pub u8);

impl FactorId {
    pub const PUBLIC_SAFETY: FactorId = FactorId(8);
}

impl std::fmt::Display for FactorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static catalog entry for a statutory factor under Correction Law § 753(1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    pub id: FactorId,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "article23ASection")]
    pub citation: &'static str,
    pub statute: &'static str,
    pub guidance: &'static str,
}

pub const FACTOR_COUNT: usize = 8;

static CATALOG: [Factor; FACTOR_COUNT] = [
    Factor {
        id: FactorId(1),
        title: "Public Policy Consideration",
        description: "New York State's public policy of encouraging the employment of persons previously convicted of one or more criminal offenses.",
        citation: "Article 23-A Section 1",
        statute: "§ 753(1)(a)",
        guidance: "New York State encourages hiring qualified applicants with prior convictions. Article 23-A aims to remove unfair barriers while ensuring reliable and trustworthy candidates are considered.",
    },
    Factor {
        id: FactorId(2),
        title: "Job Duties and Responsibilities",
        description: "The specific duties and responsibilities necessarily related to the license or employment sought.",
        citation: "Article 23-A Section 2",
        statute: "§ 753(1)(b)",
        guidance: "Consider the specific tasks, required skills, and daily responsibilities of the position.",
    },
    Factor {
        id: FactorId(3),
        title: "Conviction Impact on Performance",
        description: "The bearing, if any, the criminal offense or offenses for which the person was previously convicted will have on their ability to perform duties or responsibilities.",
        citation: "Article 23-A Section 3",
        statute: "§ 753(1)(c)",
        guidance: "Evaluate if the conviction affects job performance. For example, a financial crime conviction might be relevant for a banking position.",
    },
    Factor {
        id: FactorId(4),
        title: "Time Since Offense",
        description: "The time which has elapsed since the occurrence of the criminal offense or offenses.",
        citation: "Article 23-A Section 4",
        statute: "§ 753(1)(d)",
        guidance: "Research shows that after 4-7 conviction-free years, the likelihood of future arrest matches that of someone without convictions. Consider evidence of rehabilitation.",
    },
    Factor {
        id: FactorId(5),
        title: "Age at Time of Offense",
        description: "The age of the person at the time of occurrence of the criminal offense or offenses.",
        citation: "Article 23-A Section 5",
        statute: "§ 753(1)(e)",
        guidance: "People often mature and change significantly after youthful mistakes. Consider the applicant's age when the offense occurred.",
    },
    Factor {
        id: FactorId(6),
        title: "Offense Seriousness",
        description: "The seriousness of the offense or offenses.",
        citation: "Article 23-A Section 6",
        statute: "§ 753(1)(f)",
        guidance: "Not all offenses are equally serious. Consider the specific circumstances of the case, as legal definitions may not reflect the actual situation.",
    },
    Factor {
        id: FactorId(7),
        title: "Rehabilitation Evidence",
        description: "Any information produced by the person, or produced on their behalf, in regard to rehabilitation and good conduct.",
        citation: "Article 23-A Section 7",
        statute: "§ 753(1)(g)",
        guidance: "Look for evidence of rehabilitation such as education, employment history, training programs, or volunteer work that demonstrates responsibility and positive change.",
    },
    Factor {
        id: FactorId(8),
        title: "Public Safety and Property Protection",
        description: "The legitimate interest in protecting property, and the safety and welfare of specific individuals or the general public.",
        citation: "Article 23-A Section 8",
        statute: "§ 753(1)(h)",
        guidance: "Consider if hiring would create risks to people or property. The conviction itself is not a valid reason to deny employment.",
    },
];

/// All factors in statutory order.
pub fn catalog() -> &'static [Factor; FACTOR_COUNT] {
    &CATALOG
}

pub fn factor(id: FactorId) -> Option<&'static Factor> {
    CATALOG.iter().find(|factor| factor.id == id)
}

/// Factor that carries the written justification on the do-not-hire path.
pub fn public_safety_factor() -> &'static Factor {
    &CATALOG[FACTOR_COUNT - 1]
}
