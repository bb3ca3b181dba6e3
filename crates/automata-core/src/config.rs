//! Configuration loading and typed config structures for the Automata Lab.
//!
//! This module defines strongly-typed structs mirroring the YAML config
//! file, and provides a loader that reads and parses it. The one value
//! the stores genuinely depend on is the owner principal: it is injected
//! into each session from here rather than hardcoded as a sentinel, so
//! tests can swap it freely.

use std::path::Path;

use serde::Deserialize;

use automata_types::Principal;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Automata Lab configuration.
///
/// All fields have defaults; an empty YAML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabConfig {
    /// Registry and authorization settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LabConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `AUTOMATA_OWNER` environment variable, when set, overrides
    /// `registry.owner` from the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.registry.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.registry.apply_env_overrides();
        Ok(config)
    }
}

/// Registry and authorization settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// The fixed owner principal with elevated authorization in the
    /// automata registry and the evolution parameter store.
    #[serde(default = "default_owner")]
    pub owner: String,
}

impl RegistryConfig {
    /// Return the configured owner as a typed [`Principal`].
    pub fn owner_principal(&self) -> Principal {
        Principal::new(self.owner.clone())
    }

    /// Override the owner principal with the `AUTOMATA_OWNER` environment
    /// variable when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AUTOMATA_OWNER") {
            self.owner = val;
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_owner() -> String {
    "CONTRACT_OWNER".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
