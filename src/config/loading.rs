//! Configuration file discovery and parsing.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Path of the configuration file, whether or not it exists.
///
/// A custom directory from `--config` takes precedence over the XDG location.
pub fn get_config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir.join(CONFIG_FILE_NAME)),
        None => {
            let base = dirs::config_dir().context("Could not determine config directory")?;
            Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        }
    }
}

/// Load the configuration file if present, otherwise return defaults.
///
/// A custom directory that does not contain a config file is an error, since
/// the user asked for it explicitly.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    let config_path = get_config_path(config_dir)?;

    if !config_path.exists() {
        if config_dir.is_some() {
            anyhow::bail!(
                "Configuration file not found at {}",
                config_path.display()
            );
        }
        return Ok(Config::default());
    }

    load_from_path(&config_path)
}

/// Parse and validate the configuration at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    Ok(config)
}
