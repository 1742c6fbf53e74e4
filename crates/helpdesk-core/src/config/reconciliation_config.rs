use serde::{Deserialize, Serialize};

use super::defaults;

/// Policy constants for merging pattern and history signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    /// Pattern weight when both signals pick the same top group.
    pub agreement_pattern_weight: f64,
    /// History weight when both signals pick the same top group.
    pub agreement_history_weight: f64,
    /// Pattern weight when history lists the pattern's group below the top.
    pub partial_pattern_weight: f64,
    /// History weight when history lists the pattern's group below the top.
    pub partial_history_weight: f64,
    /// History alone wins only when its top confidence is strictly above this.
    pub history_override_threshold: u8,
    /// Pattern confidence ceiling when history disagrees.
    pub disagreement_cap: u8,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            agreement_pattern_weight: defaults::DEFAULT_AGREEMENT_PATTERN_WEIGHT,
            agreement_history_weight: defaults::DEFAULT_AGREEMENT_HISTORY_WEIGHT,
            partial_pattern_weight: defaults::DEFAULT_PARTIAL_PATTERN_WEIGHT,
            partial_history_weight: defaults::DEFAULT_PARTIAL_HISTORY_WEIGHT,
            history_override_threshold: defaults::DEFAULT_HISTORY_OVERRIDE_THRESHOLD,
            disagreement_cap: defaults::DEFAULT_DISAGREEMENT_CAP,
        }
    }
}
