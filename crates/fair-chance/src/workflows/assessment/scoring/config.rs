use serde::{Deserialize, Serialize};

/// Thresholds that turn Likert ratings into a recommendation and report sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Mean rating at or above which the engine recommends hiring.
    pub hire_threshold: f64,
    /// Mean rating at or below which the engine recommends rejection.
    pub reject_threshold: f64,
    /// Lowest individual rating reported as compliant; anything below is a concern.
    pub compliant_floor: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hire_threshold: 5.0,
            reject_threshold: 3.0,
            compliant_floor: 4,
        }
    }
}
