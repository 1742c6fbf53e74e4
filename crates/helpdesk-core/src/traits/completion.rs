use crate::errors::HelpdeskResult;

/// Generative text provider (chat-completion style).
pub trait ICompletionProvider: Send + Sync {
    /// Run one completion with a system prompt, a user prompt and a sampling
    /// temperature, returning the raw text of the reply.
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> HelpdeskResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
