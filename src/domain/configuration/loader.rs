//! Configuration parsing and credential lookup.

use crate::domain::{AppConfig, AppError};

/// Environment variable holding the LLM bearer credential.
pub const API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read the LLM credential from the environment.
///
/// An unset or blank variable yields `None`.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().map(|key| key.trim().to_string()).filter(|key| !key.is_empty())
}
