use super::super::catalog::{self, Factor};
use super::super::domain::{likert_label, RatedFactor};
use super::super::report::{AssessedFactor, FactorPartition, FactorSummary};
use super::super::validation::ValidatedRatings;
use super::config::ScoringConfig;

pub(crate) struct ScoreSheet {
    pub assessed: Vec<AssessedFactor>,
    pub partition: FactorPartition,
    pub overall_score: f64,
}

pub(crate) fn score_ratings(ratings: &ValidatedRatings, config: &ScoringConfig) -> ScoreSheet {
    let mut assessed = Vec::new();
    let mut partition = FactorPartition::default();
    let mut total: i64 = 0;

    for (factor, rated) in joined(ratings.as_slice()) {
        total += i64::from(rated.value);

        assessed.push(AssessedFactor {
            factor_id: factor.id,
            title: factor.title.to_string(),
            rating: rated.value,
            rating_label: likert_label(rated.value).to_string(),
            notes: rated.notes.clone(),
            citation: factor.citation.to_string(),
        });

        let summary = FactorSummary {
            factor_id: factor.id,
            factor: factor.title.to_string(),
            rating: rated.value.to_string(),
            notes: rated.notes.clone(),
            citation: factor.citation.to_string(),
        };

        if rated.value >= config.compliant_floor {
            partition.compliant.push(summary);
        } else {
            partition.concerns.push(summary);
        }
    }

    let overall_score = total as f64 / ratings.as_slice().len() as f64;

    ScoreSheet {
        assessed,
        partition,
        overall_score,
    }
}

fn joined(ratings: &[RatedFactor]) -> impl Iterator<Item = (&'static Factor, &RatedFactor)> {
    ratings
        .iter()
        .filter_map(|rated| catalog::factor(rated.factor_id).map(|factor| (factor, rated)))
}
