//! Configuration module for combodeck
//!
//! Manages where the catalogue, preferences and assets live, plus output
//! defaults. Configuration is stored in the user's config directory and can
//! be overridden with `COMBODECK_*` environment variables
//! (`COMBODECK_ASSETS__PORTRAIT_BASE` for nested keys).

use crate::combo::IconBases;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "combodeck";
const ENV_PREFIX: &str = "COMBODECK";

/// Default base for shareable links
pub const DEFAULT_SHARE_BASE_URL: &str = "https://combodeck.local/";

/// Asset directories used by presentation adapters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// Raster input icons, tried first
    #[serde(default = "default_icon_png_base")]
    pub icon_png_base: String,

    /// Vector input icons, tried when the raster one is missing
    #[serde(default = "default_icon_svg_base")]
    pub icon_svg_base: String,

    /// Character portraits
    #[serde(default = "default_portrait_base")]
    pub portrait_base: String,
}

fn default_icon_png_base() -> String {
    IconBases::default().png_base
}

fn default_icon_svg_base() -> String {
    IconBases::default().svg_base
}

fn default_portrait_base() -> String {
    "./assets/characters".to_string()
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            icon_png_base: default_icon_png_base(),
            icon_svg_base: default_icon_svg_base(),
            portrait_base: default_portrait_base(),
        }
    }
}

impl AssetConfig {
    /// Icon bases for route token resolution
    #[must_use]
    pub fn icon_bases(&self) -> IconBases {
        IconBases {
            png_base: self.icon_png_base.clone(),
            svg_base: self.icon_svg_base.clone(),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ComboDeckConfig {
    /// Raw JSON catalogue; the built-in sample is used when unset
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Preference file; defaults to `preferences.toml` next to the config
    #[serde(default)]
    pub preferences: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Base URL shareable links are appended to
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    #[serde(default)]
    pub assets: AssetConfig,
}

impl Default for ComboDeckConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            preferences: None,
            quiet: false,
            share_base_url: default_share_base_url(),
            assets: AssetConfig::default(),
        }
    }
}

impl ComboDeckConfig {
    /// Directory holding combodeck's config and preference files
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or the defaults cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "writing default configuration");
            let default_config = Self::default();
            default_config.save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Preference file to use, if any location resolves
    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.preferences
            .clone()
            .or_else(|| Self::config_dir().ok().map(|dir| dir.join("preferences.toml")))
    }
}
