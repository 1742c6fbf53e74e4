use serde::{Deserialize, Serialize};
use std::fmt;

use super::classification::ClassificationResult;
use super::confidence::Confidence;
use super::similarity::SimilarityOutcome;

/// Which rule of the reconciliation policy produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationSource {
    PatternBased,
    Combined,
    PatternWeighted,
    HistoryWeighted,
}

impl RecommendationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PatternBased => "pattern-based",
            Self::Combined => "combined",
            Self::PatternWeighted => "pattern-weighted",
            Self::HistoryWeighted => "history-weighted",
        }
    }
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single routing decision handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRecommendation {
    pub group: String,
    pub confidence: Confidence,
    pub source: RecommendationSource,
    pub reasoning: String,
}

/// Full response of a ticket classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketClassification {
    pub pattern: ClassificationResult,
    pub similarity: SimilarityOutcome,
    #[serde(rename = "final")]
    pub recommendation: FinalRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_serializes_as_kebab_case_tag() {
        for source in [
            RecommendationSource::PatternBased,
            RecommendationSource::Combined,
            RecommendationSource::PatternWeighted,
            RecommendationSource::HistoryWeighted,
        ] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.as_str()));
        }
    }
}
