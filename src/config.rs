// Configuration module for tipline
// This module handles loading and parsing configuration from ~/.config/tipline/config.toml

mod types;

pub use types::{Config, InputsConfig, KeyEventMode, ServerConfig, TooltipConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TipError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/tipline/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks as [`load_config`]
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed successfully: server={} inputs={:?}",
                config.server.url,
                config.inputs.ids
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Check the values that cannot be defaulted away once CLI overrides are applied
pub fn validate(config: &Config) -> Result<(), TipError> {
    if config.inputs.ids.is_empty() {
        return Err(TipError::NoInputs);
    }

    reqwest::Url::parse(&config.server.url).map_err(|e| TipError::InvalidServerUrl {
        url: config.server.url.clone(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/tipline/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tipline")
        .join("config.toml")
}
