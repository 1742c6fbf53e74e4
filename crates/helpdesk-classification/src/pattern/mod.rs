//! Taxonomy-driven classifier backed by a generative text provider.

pub mod parser;
pub mod prompt;

use std::sync::Arc;

use helpdesk_core::config::defaults::DEFAULT_COMPLETION_TEMPERATURE;
use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::models::ClassificationResult;
use helpdesk_core::traits::ICompletionProvider;
use helpdesk_core::Taxonomy;
use helpdesk_observability::events;
use tracing::debug;

pub use parser::parse_response;
pub use prompt::{build_system_prompt, build_user_prompt};

/// Classifies a ticket against a fixed taxonomy with one generative call.
///
/// The system prompt is built once from the taxonomy. There is no retry:
/// a failed call or an unparseable reply is returned to the caller.
pub struct PatternClassifier {
    provider: Arc<dyn ICompletionProvider>,
    taxonomy: Taxonomy,
    system_prompt: String,
    temperature: f32,
}

impl PatternClassifier {
    pub fn new(provider: Arc<dyn ICompletionProvider>, taxonomy: Taxonomy) -> Self {
        let system_prompt = build_system_prompt(&taxonomy);
        Self {
            provider,
            taxonomy,
            system_prompt,
            temperature: DEFAULT_COMPLETION_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Classify one ticket.
    ///
    /// Fails with `ClassifierUnavailable` when the provider call errors and
    /// with `MalformedResponse` when the reply does not parse.
    pub fn classify(
        &self,
        subject: &str,
        description: &str,
    ) -> HelpdeskResult<ClassificationResult> {
        let user_prompt = build_user_prompt(subject, description);
        let raw = self
            .provider
            .complete(&self.system_prompt, &user_prompt, self.temperature)
            .map_err(|e| {
                let err = HelpdeskError::ClassifierUnavailable {
                    reason: format!("{}: {e}", self.provider.name()),
                };
                events::pattern_classification_failed(&err.to_string());
                err
            })?;

        let result = parse_response(&raw, &self.taxonomy).inspect_err(|e| {
            events::pattern_classification_failed(&e.to_string());
        })?;

        debug!(
            group = %result.primary_group.name,
            confidence = result.primary_group.confidence.value(),
            alternatives = result.alternative_groups.len(),
            "pattern classification complete"
        );
        Ok(result)
    }
}
