//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `INCALL__`-prefixed environment variables
//! (`INCALL__CONTROLS__SUPPORT_MULTIPLE_CALLS=true`).

use config::{ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsSettings,
    pub logging: LoggingConfig,
}

/// Runtime preferences that shape the in-call controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Offer "add call" while a call is in progress
    pub support_multiple_calls: bool,
    /// Prefer the two-button unlocker over the sliding tab
    pub use_alternate_unlocker: bool,
    /// Accessibility services are running; the slider cannot be used
    pub accessibility_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load defaults, the optional file at `path`, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder
            .add_source(
                Environment::with_prefix("INCALL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
