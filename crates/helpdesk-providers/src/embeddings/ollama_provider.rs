//! Ollama local embedding provider.
//!
//! Connects to a local Ollama instance. Must pass a health check before the
//! factory hands it out.

use std::time::Duration;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http::{build_client, check_status, request_failed, trim_base};

const PROVIDER: &str = "ollama-embed";

/// Ollama local embedding provider.
pub struct OllamaEmbeddingProvider {
    client: Client,
    base_url: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaEmbeddingProvider {
    pub fn new(model: String, dimensions: usize, base_url: String) -> HelpdeskResult<Self> {
        Ok(Self {
            client: build_client(PROVIDER, Duration::from_secs(60))?,
            base_url: trim_base(&base_url),
            model,
            dimensions,
        })
    }

    /// Check if the Ollama server is reachable.
    pub fn health_check(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(Duration::from_secs(5))
            .send();

        match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        }
    }

    fn request_embeddings(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(format!("{}/api/embed", self.base_url))
            .json(&OllamaEmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| request_failed(PROVIDER, e))?;

        let resp: OllamaEmbedResponse = check_status(PROVIDER, response)?
            .json()
            .map_err(|e| ProviderError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: format!("JSON parse error: {e}"),
            })?;

        resp.embeddings
            .into_iter()
            .map(|v| {
                if v.len() != self.dimensions {
                    return Err(ProviderError::DimensionMismatch {
                        expected: self.dimensions,
                        actual: v.len(),
                    }
                    .into());
                }
                Ok(v)
            })
            .collect()
    }
}

impl IEmbeddingProvider for OllamaEmbeddingProvider {
    fn embed(&self, text: &str) -> HelpdeskResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            ProviderError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: "empty Ollama response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
