//! Generative-text providers and the config-driven factory.

pub mod api_provider;
pub mod ollama_provider;

pub use api_provider::ApiCompletionProvider;
pub use ollama_provider::OllamaCompletionProvider;

use std::sync::Arc;
use std::time::Duration;

use helpdesk_core::config::defaults::{DEFAULT_API_ENDPOINT, DEFAULT_OLLAMA_ENDPOINT};
use helpdesk_core::config::CompletionConfig;
use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::traits::ICompletionProvider;
use tracing::info;

use crate::http::api_key_from_env;

/// Build the configured completion provider.
pub fn create_completion_provider(
    config: &CompletionConfig,
) -> HelpdeskResult<Arc<dyn ICompletionProvider>> {
    let timeout = Duration::from_secs(config.timeout_secs);
    match config.provider.as_str() {
        "api" => {
            let api_key = api_key_from_env("completion-api", &config.api_key_env)?;
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
            info!(provider = "api", model = %config.model, "completion provider configured");
            Ok(Arc::new(ApiCompletionProvider::new(
                config.model.clone(),
                api_key,
                endpoint,
                timeout,
            )?))
        }
        "ollama" => {
            let endpoint = config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_OLLAMA_ENDPOINT.to_string());
            info!(provider = "ollama", model = %config.model, "completion provider configured");
            Ok(Arc::new(OllamaCompletionProvider::new(
                config.model.clone(),
                endpoint,
                timeout,
            )?))
        }
        other => Err(HelpdeskError::ConfigError(format!(
            "unknown completion provider: {other}"
        ))),
    }
}
