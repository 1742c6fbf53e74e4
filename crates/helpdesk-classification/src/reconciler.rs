//! Merges the pattern and similarity signals into one recommendation.
//!
//! Rules, first match wins:
//! 1. no similarity results: pattern verbatim (`pattern-based`)
//! 2. pattern primary is the top match: blend 0.4/0.6 (`combined`)
//! 3. pattern primary appears lower in the matches: blend 0.7/0.3 (`pattern-weighted`)
//! 4. top match above the override bar: history verbatim (`history-weighted`)
//! 5. otherwise: pattern capped at the disagreement cap (`pattern-based`)
//!
//! Weights and thresholds come from [`ReconciliationConfig`].

use helpdesk_core::config::ReconciliationConfig;
use helpdesk_core::models::{
    ClassificationResult, Confidence, FinalRecommendation, RecommendationSource,
    SimilarityOutcome,
};

/// Holds the policy constants so callers can reconcile without threading
/// config through every call.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconciliationConfig,
}

impl Reconciler {
    pub fn new(config: ReconciliationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    pub fn reconcile(
        &self,
        pattern: &ClassificationResult,
        similarity: &SimilarityOutcome,
    ) -> FinalRecommendation {
        reconcile(pattern, similarity, &self.config)
    }
}

fn blend(
    pattern: Confidence,
    pattern_weight: f64,
    history: Confidence,
    history_weight: f64,
) -> Confidence {
    Confidence::from_f64(pattern.as_f64() * pattern_weight + history.as_f64() * history_weight)
}

/// Pure, total reconciliation of the two classifier outputs.
pub fn reconcile(
    pattern: &ClassificationResult,
    similarity: &SimilarityOutcome,
    config: &ReconciliationConfig,
) -> FinalRecommendation {
    let primary = &pattern.primary_group;

    let Some(top) = similarity.top() else {
        return FinalRecommendation {
            group: primary.name.clone(),
            confidence: primary.confidence,
            source: RecommendationSource::PatternBased,
            reasoning: primary.reasoning.clone(),
        };
    };

    if top.name == primary.name {
        return FinalRecommendation {
            group: primary.name.clone(),
            confidence: blend(
                primary.confidence,
                config.agreement_pattern_weight,
                top.confidence,
                config.agreement_history_weight,
            ),
            source: RecommendationSource::Combined,
            reasoning: format!(
                "Pattern analysis and historical data agree. {} {} of {} similar historical tickets were handled by {}.",
                primary.reasoning, top.count, similarity.matched_count, top.name
            ),
        };
    }

    if let Some((_, supporting)) = similarity.find(&primary.name) {
        return FinalRecommendation {
            group: primary.name.clone(),
            confidence: blend(
                primary.confidence,
                config.partial_pattern_weight,
                supporting.confidence,
                config.partial_history_weight,
            ),
            source: RecommendationSource::PatternWeighted,
            reasoning: format!(
                "{} Partial historical support: {} similar tickets were handled by {}.",
                primary.reasoning, supporting.count, supporting.name
            ),
        };
    }

    if top.confidence.value() > config.history_override_threshold {
        return FinalRecommendation {
            group: top.name.clone(),
            confidence: top.confidence,
            source: RecommendationSource::HistoryWeighted,
            reasoning: format!(
                "Based on {} similar historical tickets handled by {}.",
                top.count, top.name
            ),
        };
    }

    FinalRecommendation {
        group: primary.name.clone(),
        confidence: primary
            .confidence
            .min(Confidence::new(config.disagreement_cap)),
        source: RecommendationSource::PatternBased,
        reasoning: format!(
            "{} Note: historical data suggests {} ({} of {} similar tickets).",
            primary.reasoning, top.name, top.count, similarity.matched_count
        ),
    }
}
