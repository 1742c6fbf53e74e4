//! Embedding providers and the config-driven factory.

pub mod api_provider;
pub mod cache;
pub mod ollama_provider;
pub mod tfidf_fallback;

pub use api_provider::ApiEmbeddingProvider;
pub use cache::CachedEmbeddingProvider;
pub use ollama_provider::OllamaEmbeddingProvider;
pub use tfidf_fallback::TfIdfFallback;

use std::sync::Arc;

use helpdesk_core::config::defaults::{DEFAULT_API_ENDPOINT, DEFAULT_OLLAMA_ENDPOINT};
use helpdesk_core::config::EmbeddingConfig;
use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

use crate::http::api_key_from_env;

/// Build the configured embedding provider, wrapped in the L1 cache when
/// `cache_size > 0`.
///
/// An unreachable Ollama server degrades to the TF-IDF fallback; a missing
/// API key or unknown provider name is a configuration error.
pub fn create_embedding_provider(
    config: &EmbeddingConfig,
) -> HelpdeskResult<Arc<dyn IEmbeddingProvider>> {
    let provider: Arc<dyn IEmbeddingProvider> = match config.provider.as_str() {
        "api" => {
            let api_key = api_key_from_env("embedding-api", &config.api_key_env)?;
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
            info!(provider = "api", model = %config.model, "embedding provider configured");
            Arc::new(ApiEmbeddingProvider::new(
                config.model.clone(),
                api_key,
                endpoint,
                config.dimensions,
            )?)
        }
        "ollama" => {
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_ENDPOINT.to_string());
            let provider =
                OllamaEmbeddingProvider::new(config.model.clone(), config.dimensions, endpoint)?;
            if provider.health_check() {
                info!(provider = "ollama", "embedding provider connected");
                Arc::new(provider)
            } else {
                warn!("Ollama unavailable, falling back to TF-IDF");
                Arc::new(TfIdfFallback::new(config.dimensions))
            }
        }
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Arc::new(TfIdfFallback::new(config.dimensions))
        }
        other => {
            return Err(HelpdeskError::ConfigError(format!(
                "unknown embedding provider: {other}"
            )))
        }
    };

    if config.cache_size > 0 {
        Ok(Arc::new(CachedEmbeddingProvider::new(
            provider,
            config.cache_size,
        )))
    } else {
        Ok(provider)
    }
}
