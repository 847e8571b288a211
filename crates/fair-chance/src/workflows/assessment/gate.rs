use super::catalog::FactorId;
use super::domain::{DecisionPath, RatedFactor};
use super::validation::InvalidInputError;

pub const JUSTIFICATION_MARKER: &str = "DO NOT HIRE Justification:";

/// Enforce the do-not-hire justification precondition and fold the text into
/// the public-safety factor's notes. Other paths pass ratings through as-is.
pub fn apply_justification(
    mut factors: Vec<RatedFactor>,
    decision: DecisionPath,
    justification: Option<&str>,
) -> Result<Vec<RatedFactor>, InvalidInputError> {
    if !decision.requires_justification() {
        return Ok(factors);
    }

    let justification = justification
        .filter(|text| !text.trim().is_empty())
        .ok_or(InvalidInputError::MissingJustification)?;

    for rated in factors
        .iter_mut()
        .filter(|rated| rated.factor_id == FactorId::PUBLIC_SAFETY)
    {
        rated.notes = annotate(&rated.notes, justification);
    }

    Ok(factors)
}

fn annotate(notes: &str, justification: &str) -> String {
    format!("{notes}\n\n{JUSTIFICATION_MARKER} {justification}")
}
