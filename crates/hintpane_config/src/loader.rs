//! Configuration file loading and validation.

use crate::discover::CONFIG_FILE_NAME;
use crate::error::ConfigError;
use crate::types::Config;
use std::path::Path;

/// Loads and validates `hintpane.toml` from a directory.
///
/// Reads `<dir>/hintpane.toml`, parses it, and validates its values.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading configuration");
    load_config_from_str(&content)
}

/// Parses and validates a `hintpane.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configured values are usable.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if let Some(manifest) = &config.update.manifest {
        if manifest.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "update.manifest must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}
