//! In-memory embedding cache in front of any provider.
//!
//! Keys are blake3 hashes of the input text so long ticket bodies do not
//! bloat the key space. Bounded by entry count via moka.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::traits::IEmbeddingProvider;
use moka::sync::Cache;
use tracing::debug;

/// Caching decorator for an [`IEmbeddingProvider`].
pub struct CachedEmbeddingProvider {
    inner: Arc<dyn IEmbeddingProvider>,
    cache: Cache<String, Vec<f32>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedEmbeddingProvider {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>, max_capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(max_capacity),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cached vectors (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl IEmbeddingProvider for CachedEmbeddingProvider {
    fn embed(&self, text: &str) -> HelpdeskResult<Vec<f32>> {
        let key = Self::key(text);
        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let vector = self.inner.embed(text)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    fn embed_batch(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts.iter().map(|t| Self::key(t)).collect();
        let mut results: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|&i| results[i].is_none()).collect();
        self.hits
            .fetch_add((texts.len() - missing.len()) as u64, Ordering::Relaxed);
        self.misses.fetch_add(missing.len() as u64, Ordering::Relaxed);

        if !missing.is_empty() {
            let pending: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let fresh = self.inner.embed_batch(&pending)?;
            if fresh.len() != pending.len() {
                return Err(ProviderError::InvalidResponse {
                    provider: self.inner.name().to_string(),
                    reason: format!("expected {} embeddings, got {}", pending.len(), fresh.len()),
                }
                .into());
            }
            debug!(requested = pending.len(), "embedding cache miss batch");
            for (&i, vector) in missing.iter().zip(fresh) {
                self.cache.insert(keys[i].clone(), vector.clone());
                results[i] = Some(vector);
            }
        }

        Ok(results.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
