//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod aggregate;
pub mod check;
pub mod generate;
pub mod train;

use std::path::Path;

use trade_core::types::TradeDataset;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Dataset for commands that read one.
///
/// An explicit `--input` must exist. Without it the configured data path is
/// used, generating and saving a dataset on first run.
pub(crate) fn resolve_dataset(input: Option<&Path>, config: &CliConfig) -> Result<TradeDataset> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()));
            }
            Ok(adapter_loader::load_csv(path)?)
        }
        None => Ok(adapter_loader::load_or_generate(
            &config.data_path,
            config.rows,
            config.seed,
        )?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_input_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.csv");
        let err = resolve_dataset(Some(&missing), &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_configured_path_is_generated_on_first_run() {
        let dir = tempdir().unwrap();
        let config = CliConfig {
            rows: 40,
            data_path: dir.path().join("trade.csv"),
            ..CliConfig::default()
        };
        let dataset = resolve_dataset(None, &config).unwrap();
        assert_eq!(dataset.len(), 40);
        assert!(config.data_path.exists());
    }
}
