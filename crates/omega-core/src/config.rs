//! Configuration loading and typed config structures for the Omega runtime.
//!
//! The canonical configuration lives in `omega-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader. Every field has a default,
//! so an empty file (or a missing section) yields a usable configuration.

use std::path::Path;

use serde::Deserialize;

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

/// Top-level runtime configuration.
///
/// Mirrors the structure of `omega-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    /// World-level settings (name, seed).
    #[serde(default)]
    pub world: WorldConfig,

    /// Tick cadence and boundary settings.
    #[serde(default)]
    pub ticks: TickConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RuntimeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable runtime name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducible runs.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
        }
    }
}

/// Tick cadence and boundary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickConfig {
    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub interval_ms: u64,

    /// Maximum number of ticks before the runner stops (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (`trace`, `debug`, `info`, `warn`, `error`).
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

fn default_world_name() -> String {
    "omega".to_owned()
}

const fn default_seed() -> u64 {
    143
}

const fn default_tick_interval_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = RuntimeConfig::default();
        assert_eq!(config.world.name, "omega");
        assert_eq!(config.world.seed, 143);
        assert_eq!(config.ticks.interval_ms, 250);
        assert_eq!(config.ticks.max_ticks, 0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_document() {
        let yaml = r"
world:
  name: omega-test
  seed: 7
ticks:
  interval_ms: 50
  max_ticks: 500
logging:
  level: debug
";
        let config = RuntimeConfig::parse(yaml);
        assert_eq!(
            config.ok(),
            Some(RuntimeConfig {
                world: WorldConfig {
                    name: "omega-test".to_owned(),
                    seed: 7,
                },
                ticks: TickConfig {
                    interval_ms: 50,
                    max_ticks: 500,
                },
                logging: LoggingConfig {
                    level: "debug".to_owned(),
                },
            })
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = RuntimeConfig::parse("world:\n  seed: 99\n");
        assert!(
            config
                .as_ref()
                .is_ok_and(|config| config.world.seed == 99 && config.ticks.interval_ms == 250)
        );
    }

    #[test]
    fn malformed_yaml_is_a_typed_error() {
        let result = RuntimeConfig::parse("world: [not a map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
