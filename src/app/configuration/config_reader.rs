//! Configuration loading from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Directory holding learnpath's local state.
pub const LEARNPATH_DIR: &str = ".learnpath";
/// Config file name inside [`LEARNPATH_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default config location under `root`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(LEARNPATH_DIR).join(CONFIG_FILE)
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `.learnpath/config.toml`
/// under `root` is used when present, defaults otherwise. A relative
/// `store.path` is resolved against `root`.
pub fn load_config(path: Option<&Path>, root: &Path) -> Result<AppConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_content(&fs::read_to_string(path)?)?
        }
        None => {
            let default_path = default_config_path(root);
            if default_path.exists() {
                parse_config_content(&fs::read_to_string(&default_path)?)?
            } else {
                AppConfig::default()
            }
        }
    };

    if config.store.path.is_relative() {
        config.store.path = root.join(&config.store.path);
    }
    Ok(config)
}
