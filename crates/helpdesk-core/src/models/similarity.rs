use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// A support group suggested by historical neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub name: String,
    pub confidence: Confidence,
    /// Raw occurrences among the returned neighbours.
    pub count: usize,
}

impl SimilarityMatch {
    pub fn new(name: impl Into<String>, confidence: u8, count: usize) -> Self {
        Self {
            name: name.into(),
            confidence: Confidence::new(confidence),
            count,
        }
    }
}

/// Result of a similarity lookup. Failures are carried as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityOutcome {
    pub success: bool,
    /// Sorted by confidence, highest first.
    pub results: Vec<SimilarityMatch>,
    pub matched_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SimilarityOutcome {
    pub fn succeeded(results: Vec<SimilarityMatch>, matched_count: usize) -> Self {
        Self {
            success: true,
            results,
            matched_count,
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            results: Vec::new(),
            matched_count: 0,
            error: Some(reason.into()),
        }
    }

    /// Highest-confidence match, if any.
    pub fn top(&self) -> Option<&SimilarityMatch> {
        self.results.first()
    }

    /// First match for the given group name.
    pub fn find(&self, group: &str) -> Option<(usize, &SimilarityMatch)> {
        self.results.iter().enumerate().find(|(_, m)| m.name == group)
    }
}
