//! Questionnaire state as an immutable value.
//!
//! Every assessor action is a [`DraftEvent`]; [`AssessmentDraft::apply`] returns the
//! next draft and leaves the current one untouched, so handlers can keep history,
//! discard edits, or reset simply by holding on to (or dropping) values.

use serde::{Deserialize, Serialize};

use super::catalog::{self, Factor, FactorId, FACTOR_COUNT};
use super::domain::{DecisionPath, RatedFactor, MAX_RATING, MIN_RATING};
use super::gate::apply_justification;
use super::validation::InvalidInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStage {
    Welcome,
    Rating,
    ConfirmDoNotHire,
}

/// Edit events emitted by the rating capture surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DraftEvent {
    Begin,
    Rate { factor_id: FactorId, value: i32 },
    Annotate { factor_id: FactorId, notes: String },
    Next,
    Previous,
    SetCertificate { has_certificate: bool },
    OpenDoNotHire,
    EditJustification { text: String },
    CancelDoNotHire,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("assessment has not been started")]
    NotStarted,
    #[error("factor {0} is not part of the Article 23-A catalog")]
    UnknownFactor(FactorId),
    #[error("rating {value} for factor {factor_id} is outside the 1-7 scale")]
    RatingOutOfRange { factor_id: FactorId, value: i32 },
    #[error("every factor must be reviewed before a decision is recorded")]
    Incomplete,
    #[error("no do-not-hire confirmation is open")]
    NoPendingDecision,
    #[error(transparent)]
    Input(#[from] InvalidInputError),
}

/// Ratings, certificate flag, and chosen path ready for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAssessment {
    pub factors: Vec<RatedFactor>,
    pub has_certificate: bool,
    pub decision: DecisionPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentDraft {
    stage: DraftStage,
    factors: Vec<RatedFactor>,
    current: usize,
    has_certificate: bool,
    justification: String,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentDraft {
    /// Fresh draft on the welcome screen with every factor at neutral.
    pub fn new() -> Self {
        Self {
            stage: DraftStage::Welcome,
            factors: catalog::catalog()
                .iter()
                .map(|factor| RatedFactor::neutral(factor.id))
                .collect(),
            current: 0,
            has_certificate: false,
            justification: String::new(),
        }
    }

    pub fn stage(&self) -> DraftStage {
        self.stage
    }

    pub fn factors(&self) -> &[RatedFactor] {
        &self.factors
    }

    pub fn has_certificate(&self) -> bool {
        self.has_certificate
    }

    pub fn justification(&self) -> &str {
        &self.justification
    }

    /// One-based question number, as shown to the assessor.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn current_factor(&self) -> (&'static Factor, &RatedFactor) {
        (&catalog::catalog()[self.current], &self.factors[self.current])
    }

    /// The questionnaire is complete once the assessor reaches the last factor.
    pub fn is_complete(&self) -> bool {
        self.stage != DraftStage::Welcome && self.current == FACTOR_COUNT - 1
    }

    /// The do-not-hire confirmation stays disabled until this is true.
    pub fn can_confirm_do_not_hire(&self) -> bool {
        self.stage == DraftStage::ConfirmDoNotHire && !self.justification.trim().is_empty()
    }

    pub fn apply(&self, event: DraftEvent) -> Result<AssessmentDraft, DraftError> {
        if self.stage == DraftStage::Welcome
            && !matches!(event, DraftEvent::Begin | DraftEvent::Reset)
        {
            return Err(DraftError::NotStarted);
        }

        let mut next = self.clone();
        match event {
            DraftEvent::Begin => {
                if next.stage == DraftStage::Welcome {
                    next.stage = DraftStage::Rating;
                }
            }
            DraftEvent::Rate { factor_id, value } => {
                if !(MIN_RATING..=MAX_RATING).contains(&value) {
                    return Err(DraftError::RatingOutOfRange { factor_id, value });
                }
                next.slot_mut(factor_id)?.value = value;
            }
            DraftEvent::Annotate { factor_id, notes } => {
                next.slot_mut(factor_id)?.notes = notes;
            }
            DraftEvent::Next => {
                next.current = (next.current + 1).min(FACTOR_COUNT - 1);
            }
            DraftEvent::Previous => {
                next.current = next.current.saturating_sub(1);
            }
            DraftEvent::SetCertificate { has_certificate } => {
                next.has_certificate = has_certificate;
            }
            DraftEvent::OpenDoNotHire => {
                if !self.is_complete() {
                    return Err(DraftError::Incomplete);
                }
                next.stage = DraftStage::ConfirmDoNotHire;
            }
            DraftEvent::EditJustification { text } => {
                if next.stage != DraftStage::ConfirmDoNotHire {
                    return Err(DraftError::NoPendingDecision);
                }
                next.justification = text;
            }
            DraftEvent::CancelDoNotHire => {
                if next.stage != DraftStage::ConfirmDoNotHire {
                    return Err(DraftError::NoPendingDecision);
                }
                next.stage = DraftStage::Rating;
            }
            DraftEvent::Reset => return Ok(AssessmentDraft::new()),
        }

        Ok(next)
    }

    /// Apply a batch of events in order, stopping at the first rejected one.
    pub fn apply_all<I>(&self, events: I) -> Result<AssessmentDraft, DraftError>
    where
        I: IntoIterator<Item = DraftEvent>,
    {
        events
            .into_iter()
            .try_fold(self.clone(), |draft, event| draft.apply(event))
    }

    /// Close the questionnaire on the chosen path. Do-not-hire is only confirmed
    /// from the open confirmation step.
    pub fn submit(&self, decision: DecisionPath) -> Result<CompletedAssessment, DraftError> {
        if !self.is_complete() {
            return Err(DraftError::Incomplete);
        }
        if decision == DecisionPath::DoNotHire && self.stage != DraftStage::ConfirmDoNotHire {
            return Err(DraftError::NoPendingDecision);
        }

        let factors = apply_justification(
            self.factors.clone(),
            decision,
            Some(self.justification.as_str()),
        )?;

        Ok(CompletedAssessment {
            factors,
            has_certificate: self.has_certificate,
            decision,
        })
    }

    fn slot_mut(&mut self, factor_id: FactorId) -> Result<&mut RatedFactor, DraftError> {
        self.factors
            .iter_mut()
            .find(|rated| rated.factor_id == factor_id)
            .ok_or(DraftError::UnknownFactor(factor_id))
    }
}
