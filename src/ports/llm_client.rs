//! LLM client port definition.

use crate::domain::AppError;

/// A single-message chat completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Text sent as the only user-role message.
    pub prompt: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Port for text generation against an external model.
pub trait LlmClient {
    /// Send the prompt and return the generated text.
    ///
    /// Transport failures, timeouts and non-success statuses surface as
    /// [`AppError::Transport`].
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}
