//! Check command implementation
//!
//! Validates the resolved configuration and reports the dataset status.

use std::path::Path;

use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, config_path: &Path) -> Result<()> {
    info!("Checking tradescope configuration...");
    if config_path.exists() {
        info!("  Config file: {}", config_path.display());
    } else {
        info!("  Config file: {} (absent, using defaults)", config_path.display());
    }
    info!("  Rows: {}", config.rows);
    info!("  Seed: {}", config.seed);
    info!("  Trees: {}", config.trees);
    info!("  Log level: {}", config.log_level);

    if config.data_path.exists() {
        let dataset = adapter_loader::load_csv(&config.data_path)?;
        info!(
            "  Dataset: {} ({} records)",
            config.data_path.display(),
            dataset.len()
        );
    } else {
        warn!(
            "  Dataset: {} not found; it will be generated on first use",
            config.data_path.display()
        );
    }

    config.validate()?;
    info!("Configuration OK");
    Ok(())
}
