//! CLI configuration management.
//!
//! Loads settings from a TOML file (defaults when the file is absent), then
//! applies `TRADESCOPE_*` environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Valid values for `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// One or more settings are invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rows to synthesise when no dataset exists yet
    pub rows: usize,
    /// Seed for synthesis, the train/test split and the forest
    pub seed: u64,
    /// Dataset CSV path
    pub data_path: PathBuf,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
    /// Trees in the random forest
    pub trees: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rows: trade_synth::DEFAULT_ROW_COUNT,
            seed: trade_synth::DEFAULT_SEED,
            data_path: PathBuf::from("data/global_trade_data.csv"),
            log_level: "info".to_string(),
            trees: 100,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Unparseable numeric values are ignored with a warning.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(rows) = lookup("TRADESCOPE_ROWS") {
            match rows.trim().parse() {
                Ok(rows) => self.rows = rows,
                Err(_) => warn!(value = %rows, "Ignoring unparseable TRADESCOPE_ROWS"),
            }
        }

        if let Some(seed) = lookup("TRADESCOPE_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.seed = seed,
                Err(_) => warn!(value = %seed, "Ignoring unparseable TRADESCOPE_SEED"),
            }
        }

        if let Some(data_path) = lookup("TRADESCOPE_DATA_PATH") {
            self.data_path = PathBuf::from(data_path);
        }

        if let Some(log_level) = lookup("TRADESCOPE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if self.rows == 0 {
            errors.push("rows must be greater than 0".to_string());
        }
        if self.rows > 10_000_000 {
            errors.push(format!(
                "rows {} exceeds maximum allowed (10,000,000)",
                self.rows
            ));
        }

        if self.trees == 0 {
            errors.push("trees must be greater than 0".to_string());
        }

        if self.data_path.as_os_str().is_empty() {
            errors.push("data_path cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.rows, 5000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.trees, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default().with_overrides(vars(&[
            ("TRADESCOPE_ROWS", "250"),
            ("TRADESCOPE_SEED", "7"),
            ("TRADESCOPE_DATA_PATH", "/tmp/trade.csv"),
            ("TRADESCOPE_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.rows, 250);
        assert_eq!(config.seed, 7);
        assert_eq!(config.data_path, PathBuf::from("/tmp/trade.csv"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_override_ignored() {
        let config = CliConfig::default().with_overrides(vars(&[("TRADESCOPE_ROWS", "many")]));
        assert_eq!(config.rows, 5000);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CliConfig {
            rows: 0,
            trees: 0,
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("rows")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_log_levels_case_insensitive() {
        for level in ["trace", "DEBUG", "Info", "warn", "error"] {
            let config = CliConfig {
                log_level: level.to_string(),
                ..CliConfig::default()
            };
            assert!(config.validate().is_ok(), "{} should be valid", level);
        }
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tradescope.toml");
        std::fs::write(&path, "rows = 1200\nlog_level = \"warn\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.rows, 1200);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "rows = \"five\"").unwrap();
        assert!(matches!(
            CliConfig::load_or_default(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
