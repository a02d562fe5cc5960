//! Free-form code snippet generation.

use log::{debug, warn};

use crate::domain::curriculum::prompt;
use crate::domain::snippet::clean_code_response;
use crate::domain::{AppError, LlmApiConfig};
use crate::ports::{CompletionRequest, LlmClient};

/// Generates a single code snippet. Unlike curricula there is no fallback:
/// failures are returned to the caller.
pub struct CodeSnippetService<'a> {
    client: Option<&'a dyn LlmClient>,
    settings: &'a LlmApiConfig,
}

impl<'a> CodeSnippetService<'a> {
    pub fn new(client: Option<&'a dyn LlmClient>, settings: &'a LlmApiConfig) -> Self {
        Self { client, settings }
    }

    pub fn generate(&self, request: &str, language: &str) -> Result<String, AppError> {
        let client = self
            .client
            .ok_or_else(|| AppError::config_error("MISTRAL_API_KEY environment variable not set"))?;

        let prompt = prompt::build_code_snippet(request, language)?;
        debug!("Code snippet prompt: {} chars", prompt.len());

        let content = client
            .complete(CompletionRequest {
                prompt,
                max_tokens: self.settings.snippet_max_tokens,
                temperature: self.settings.temperature,
            })
            .inspect_err(|err| warn!("Code generation error: {}", err))?;

        Ok(clean_code_response(&content))
    }
}
