//! Chat-completions client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, LlmApiConfig};
use crate::ports::{CompletionRequest, LlmClient};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for a Mistral-compatible chat completions endpoint.
#[derive(Clone)]
pub struct HttpLlmClient {
    api_key: String,
    api_url: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpLlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLlmClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpLlmClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &LlmApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), model: config.model.clone(), client })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl LlmClient for HttpLlmClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: &request.prompt }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("request timed out: {}", e)
                } else {
                    format!("HTTP request failed: {}", e)
                };
                AppError::transport(message, None)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            let error_text: String = error_text.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(AppError::transport(
                format!("API error: {}", error_text),
                Some(status.as_u16()),
            ));
        }

        let chat: ChatResponse = response.json().map_err(|e| {
            AppError::transport(format!("Failed to parse response: {}", e), Some(status.as_u16()))
        })?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::transport("No message content in response", Some(status.as_u16()))
            })
    }
}
