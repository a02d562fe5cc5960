//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `.learnpath/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// LLM endpoint configuration.
    #[serde(default)]
    pub llm: LlmApiConfig,
    /// Document store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.llm.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

/// Chat-completions endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmApiConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens for curriculum requests.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Upper bound on generated tokens for code snippet requests.
    #[serde(default = "default_snippet_max_tokens")]
    pub snippet_max_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds. Expiry is treated like any other failure.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            snippet_max_tokens: default_snippet_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

impl LlmApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_tokens == 0 || self.snippet_max_tokens == 0 {
            return Err(AppError::InvalidConfig(
                "max_tokens and snippet_max_tokens must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.mistral.ai/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "mistral-small-latest".to_string()
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_snippet_max_tokens() -> u32 {
    1500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    30
}

/// Where the JSON-file document store lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Path of the store file, relative to the working directory unless absolute.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("store.path must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".learnpath/store.json")
}
