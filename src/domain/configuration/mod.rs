pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, LlmApiConfig, StoreConfig};
pub use loader::{API_KEY_ENV, api_key_from_env, parse_config_content};
