//! Ollama local chat provider.

use std::time::Duration;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::traits::ICompletionProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::api_provider::ChatMessage;
use crate::http::{build_client, check_status, request_failed, trim_base};

const PROVIDER: &str = "ollama-chat";

/// Calls `POST {base_url}/api/chat` with streaming disabled and JSON output.
pub struct OllamaCompletionProvider {
    client: Client,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
    format: &'static str,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaReply,
}

#[derive(Deserialize)]
struct OllamaReply {
    content: String,
}

impl OllamaCompletionProvider {
    pub fn new(model: String, base_url: String, timeout: Duration) -> HelpdeskResult<Self> {
        Ok(Self {
            client: build_client(PROVIDER, timeout)?,
            model,
            base_url: trim_base(&base_url),
        })
    }
}

impl ICompletionProvider for OllamaCompletionProvider {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> HelpdeskResult<String> {
        let request = OllamaChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            stream: false,
            format: "json",
            options: OllamaOptions { temperature },
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .map_err(|e| request_failed(PROVIDER, e))?;

        let reply: OllamaChatResponse = check_status(PROVIDER, response)?
            .json()
            .map_err(|e| ProviderError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: format!("JSON parse error: {e}"),
            })?;
        Ok(reply.message.content)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
