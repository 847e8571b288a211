use std::collections::BTreeMap;

use super::catalog::{self, FactorId, FACTOR_COUNT};
use super::domain::RatedFactor;

/// Validation errors raised before any score is computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("assessment requires {expected} rated factors, found {found}")]
    FactorCount { expected: usize, found: usize },
    #[error("factor {0} is not part of the Article 23-A catalog")]
    UnknownFactor(FactorId),
    #[error("factor {0} was rated more than once")]
    DuplicateFactor(FactorId),
    #[error("factor {factor_id} rating {value} is outside the 1-7 scale")]
    RatingOutOfRange { factor_id: FactorId, value: i32 },
    #[error("a do-not-hire decision requires a written justification")]
    MissingJustification,
    #[error("report is inconsistent: {0}")]
    InconsistentReport(&'static str),
}

/// A complete rating set: one in-range rating per catalog factor, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRatings(Vec<RatedFactor>);

impl ValidatedRatings {
    pub fn new(factors: &[RatedFactor]) -> Result<Self, InvalidInputError> {
        if factors.len() != FACTOR_COUNT {
            return Err(InvalidInputError::FactorCount {
                expected: FACTOR_COUNT,
                found: factors.len(),
            });
        }

        let mut by_id = BTreeMap::new();
        for rated in factors {
            if catalog::factor(rated.factor_id).is_none() {
                return Err(InvalidInputError::UnknownFactor(rated.factor_id));
            }
            if !rated.is_in_range() {
                return Err(InvalidInputError::RatingOutOfRange {
                    factor_id: rated.factor_id,
                    value: rated.value,
                });
            }
            if by_id.insert(rated.factor_id, rated.clone()).is_some() {
                return Err(InvalidInputError::DuplicateFactor(rated.factor_id));
            }
        }

        // Eight distinct catalog ids means every factor is present.
        Ok(Self(by_id.into_values().collect()))
    }

    pub fn as_slice(&self) -> &[RatedFactor] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<RatedFactor> {
        self.0
    }
}
