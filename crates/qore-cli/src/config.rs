//! Configuration management for the qore CLI.
//!
//! Supports loading configuration from:
//! 1. A YAML file (`--config`, or `~/.qore/config.yaml` when present)
//! 2. Environment variables (with `QORE_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Encoder settings
    #[serde(default)]
    pub encode: EncodeConfig,

    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Settings for the `encode` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeConfig {
    /// Append the checksum trailer to binary output
    #[serde(default = "default_true")]
    pub checksum: bool,

    /// Output format: "binary" or "text"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            checksum: default_true(),
            format: default_format(),
        }
    }
}

impl EncodeConfig {
    /// Whether the configured output is the text listing.
    pub fn is_text(&self) -> bool {
        self.format == "text"
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "binary".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from `path` if given, else from the default location if it exists
    /// 2. Apply environment variable overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(path)?,
                _ => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; absent or unparsable values leave
    /// fields unchanged.
    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("QORE_CHECKSUM") {
            if let Some(val) = parse_bool(&v) {
                self.encode.checksum = val;
            }
        }
        if let Some(v) = lookup("QORE_OUTPUT_FORMAT") {
            self.encode.format = v.to_ascii_lowercase();
        }
        if let Some(v) = lookup("QORE_LOG_LEVEL") {
            self.log_level = Some(v.to_ascii_lowercase());
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.encode.format.as_str() {
            "binary" | "text" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Unknown output format: {other} (expected binary or text)"
                )));
            }
        }

        if let Some(level) = &self.log_level {
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {}
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "Invalid log level: {other}"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// `~/.qore/config.yaml`, if a home directory is known.
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qore").join("config.yaml"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.encode.checksum);
        assert_eq!(config.encode.format, "binary");
        assert!(!config.encode.is_text());
        assert_eq!(config.log_level, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("encode:\n  format: text\n").unwrap();
        assert!(config.encode.checksum);
        assert!(config.encode.is_text());

        let config: Config = serde_yaml_ng::from_str("log_level: debug\n").unwrap();
        assert_eq!(config.encode, EncodeConfig::default());
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(serde_yaml_ng::from_str::<Config>("encode:\n  compress: true\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "encode:\n  checksum: false\nlog_level: info\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.encode.checksum);
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/qore.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config::default().merge_vars(vars(&[
            ("QORE_CHECKSUM", "off"),
            ("QORE_OUTPUT_FORMAT", "TEXT"),
            ("QORE_LOG_LEVEL", "Debug"),
        ]));
        assert!(!config.encode.checksum);
        assert!(config.encode.is_text());
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unparsable_bool_is_ignored() {
        let config = Config::default().merge_vars(vars(&[("QORE_CHECKSUM", "maybe")]));
        assert!(config.encode.checksum);
    }

    #[test]
    fn test_validate_invalid_format() {
        let config = Config::default().merge_vars(vars(&[("QORE_OUTPUT_FORMAT", "hex")]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = Some("loud".to_string());
        assert!(config.validate().is_err());
    }
}
