use serde::{Deserialize, Serialize};

use super::defaults;

/// Nearest-neighbour lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Neighbours must have cosine similarity strictly above this.
    pub threshold: f64,
    /// Number of neighbours to consider.
    pub top_k: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            top_k: defaults::DEFAULT_SIMILARITY_TOP_K,
        }
    }
}
