use crate::{
    error::{Error, Result},
    types::LanguageTag,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Toolchain;

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = ".run.json";

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "RUN_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    /// Suppress timing output as if `-nt` were always given
    #[serde(default)]
    pub no_timing: bool,

    /// Toolchain overrides keyed by language
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<LanguageTag, LanguageConfig>,
}

/// Toolchain overrides for a single language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct LanguageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_std: Option<String>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the configuration for a dispatch started in `start_dir`.
    ///
    /// `RUN_CONFIG` wins when set; otherwise the nearest `.run.json` at or
    /// above `start_dir` is used. No file means the built-in defaults.
    pub fn load(start_dir: &Path) -> Result<Self> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(explicit);
            debug!("Loading config from {}={}", CONFIG_ENV_VAR, path.display());
            return Self::load_from_file(&path).map_err(|e| match e {
                Error::IoError(io) => Error::ConfigError(format!(
                    "Cannot read {} from {}: {io}",
                    path.display(),
                    CONFIG_ENV_VAR
                )),
                other => other,
            });
        }

        match Self::find_config_file(start_dir) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    pub fn language(&self, language: LanguageTag) -> Option<&LanguageConfig> {
        self.languages.get(&language)
    }

    /// Built-in toolchain for `language` with this config's overrides applied
    pub fn toolchain_for(&self, language: LanguageTag) -> Toolchain {
        let mut toolchain = Toolchain::default_for(language);
        if let Some(overrides) = self.language(language) {
            toolchain.apply(overrides);
        }
        toolchain
    }
}
