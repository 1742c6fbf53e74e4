//! OpenAI-compatible chat completion provider.

use std::time::Duration;

use helpdesk_core::errors::{HelpdeskResult, ProviderError};
use helpdesk_core::traits::ICompletionProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{build_client, check_status, request_failed, trim_base};

const PROVIDER: &str = "completion-api";

/// Calls `POST {endpoint}/chat/completions` with a system and a user message,
/// asking for a JSON object reply.
pub struct ApiCompletionProvider {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
}

#[derive(Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ApiCompletionProvider {
    pub fn new(
        model: String,
        api_key: String,
        endpoint: String,
        timeout: Duration,
    ) -> HelpdeskResult<Self> {
        Ok(Self {
            client: build_client(PROVIDER, timeout)?,
            model,
            api_key,
            endpoint: trim_base(&endpoint),
        })
    }
}

/// Extract `choices[0].message.content` from a chat completion body.
pub fn parse_chat_response(body: &str) -> HelpdeskResult<String> {
    let resp: ChatResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: format!("JSON parse error: {e}"),
        })?;

    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| {
            ProviderError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: "response has no message content".to_string(),
            }
            .into()
        })
}

impl ICompletionProvider for ApiCompletionProvider {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> HelpdeskResult<String> {
        let request = ChatRequest {
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
            temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| request_failed(PROVIDER, e))?;

        let body = check_status(PROVIDER, response)?
            .text()
            .map_err(|e| request_failed(PROVIDER, e))?;
        debug!(model = %self.model, bytes = body.len(), "chat completion received");
        parse_chat_response(&body)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
