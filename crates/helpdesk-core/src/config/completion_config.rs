use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative text provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Completion provider: "api", "ollama".
    pub provider: String,
    pub model: String,
    /// Base URL; provider-specific default when unset.
    pub endpoint: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature for classification prompts.
    pub temperature: f32,
    /// HTTP request timeout.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_COMPLETION_PROVIDER.to_string(),
            model: defaults::DEFAULT_COMPLETION_MODEL.to_string(),
            endpoint: None,
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_COMPLETION_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_COMPLETION_TIMEOUT_SECS,
        }
    }
}
