//! OpenAI-compatible embedding API provider.
//!
//! Works against any `/embeddings` endpoint that accepts
//! `{model, input: [..]}` and answers `{data: [{embedding: [..]}]}`.
//! Retries with exponential backoff.

use std::time::Duration;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http::{build_client, check_status, request_failed, trim_base};

const PROVIDER: &str = "embedding-api";

/// Cloud embedding provider with retry.
pub struct ApiEmbeddingProvider {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl ApiEmbeddingProvider {
    /// `endpoint` is the API base, e.g. `https://api.openai.com/v1`.
    pub fn new(
        model: String,
        api_key: String,
        endpoint: String,
        dimensions: usize,
    ) -> HelpdeskResult<Self> {
        Ok(Self {
            client: build_client(PROVIDER, Duration::from_secs(30))?,
            model,
            api_key,
            endpoint: trim_base(&endpoint),
            dimensions,
            max_retries: 3,
        })
    }

    /// Override the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn request_embeddings(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                std::thread::sleep(delay);
                debug!(attempt, "retrying API embedding request");
            }

            match self.send_request(texts) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "API embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            ProviderError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: "all retries exhausted".to_string(),
            }
            .into()
        }))
    }

    fn send_request(&self, texts: &[String]) -> HelpdeskResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(format!("{}/embeddings", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| request_failed(PROVIDER, e))?;

        let body = check_status(PROVIDER, response)?
            .text()
            .map_err(|e| request_failed(PROVIDER, e))?;
        parse_embed_response(&body, texts.len(), self.dimensions)
    }
}

/// Decode an `/embeddings` response body, checking count and dimensions.
pub fn parse_embed_response(
    body: &str,
    expected_count: usize,
    dimensions: usize,
) -> HelpdeskResult<Vec<Vec<f32>>> {
    let resp: EmbedResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: format!("JSON parse error: {e}"),
        })?;

    if resp.data.len() != expected_count {
        return Err(ProviderError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: format!(
                "expected {expected_count} embeddings, got {}",
                resp.data.len()
            ),
        }
        .into());
    }

    resp.data
        .into_iter()
        .map(|d| {
            if d.embedding.len() != dimensions {
                return Err(ProviderError::DimensionMismatch {
                    expected: dimensions,
                    actual: d.embedding.len(),
                }
                .into());
            }
            Ok(d.embedding)
        })
        .collect()
}

impl IEmbeddingProvider for ApiEmbeddingProvider {
    fn embed(&self, text: &str) -> HelpdeskResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            ProviderError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: "empty response".to_string(),
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
