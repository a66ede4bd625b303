//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RoutesConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RoutesConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic validation; serde already handled the syntactic part.
pub fn validate_config(config: &RoutesConfig) -> Result<(), ConfigError> {
    if config.controllers_path.is_empty() {
        return Err(ConfigError::Validation(
            "controllers_path must not be empty".to_string(),
        ));
    }
    if config.module_suffix.is_empty() {
        return Err(ConfigError::Validation(
            "module_suffix must not be empty".to_string(),
        ));
    }
    Ok(())
}
