//! Generate command implementation
//!
//! Synthesises a dataset and writes it as CSV.

use std::path::Path;

use tracing::info;
use trade_analytics::summarise;

use crate::{CliError, Result};

/// Run the generate command
pub fn run(rows: usize, seed: u64, output: &Path) -> Result<()> {
    if rows == 0 {
        return Err(CliError::invalid_argument("--rows must be greater than 0"));
    }

    info!("Generating synthetic trade data...");
    info!("  Rows: {}", rows);
    info!("  Seed: {}", seed);
    info!("  Output: {}", output.display());

    let dataset = trade_synth::generate(rows, seed)?;
    adapter_loader::save_csv(output, &dataset)?;

    let summary = summarise(&dataset);
    info!(
        "Wrote {} records, total volume ${:.2}",
        summary.transaction_count, summary.total_volume_usd
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_writes_readable_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.csv");
        run(30, 42, &output).unwrap();

        let loaded = adapter_loader::load_csv(&output).unwrap();
        assert_eq!(loaded, trade_synth::generate(30, 42).unwrap());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.csv");
        assert!(matches!(run(0, 42, &output), Err(CliError::InvalidArgument(_))));
        assert!(!output.exists());
    }
}
