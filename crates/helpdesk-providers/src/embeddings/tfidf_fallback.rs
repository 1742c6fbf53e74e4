//! Hashed term-frequency embedding provider.
//!
//! Maps ticket words and adjacent word pairs into fixed-dimension buckets.
//! Needs no network, so it backs offline runs and the test suites.

use std::collections::HashMap;

use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::traits::IEmbeddingProvider;

/// Words too common in support tickets to carry routing signal.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "has", "not", "can", "cannot",
    "our", "are", "was", "but", "all", "any", "please", "help", "hi", "hello", "thanks", "is",
    "it", "to", "of", "on", "in", "my", "we", "me", "an", "be", "at", "or",
];

/// Deterministic offline embedding provider.
///
/// Unigrams are weighted by frequency and a length-based rarity estimate;
/// bigrams add a smaller weight so word order contributes a little. The
/// output is L2-normalized, or all zeros when the text has no usable terms.
pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(str::to_lowercase)
            .filter(|s| !STOPWORDS.contains(&s.as_str()))
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        let mut weights: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *weights.entry(tok.clone()).or_default() += 1.0 + (tok.len() as f32).ln();
        }
        for pair in tokens.windows(2) {
            *weights.entry(format!("{} {}", pair[0], pair[1])).or_default() += 0.5;
        }

        let total = tokens.len() as f32;
        for (term, weight) in &weights {
            vec[Self::bucket(term, self.dimensions)] += weight / total;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> HelpdeskResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }
}
