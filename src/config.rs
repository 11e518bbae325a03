//! Configuration loading
//!
//! Reads `~/.config/combobox/config.toml`. A missing or malformed default
//! file falls back to defaults; an explicitly requested file must parse.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{ComboboxConfig, Config, HighlightConfig};

use crate::error::ComboboxError;

const CONFIG_DIR: &str = "combobox";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Loads the default config file, falling back to defaults on any problem
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ComboboxError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ComboboxError> {
    toml::from_str(contents).map_err(|e| ComboboxError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
