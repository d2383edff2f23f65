//! CSV dataset writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use trade_core::types::TradeRecord;
use tracing::info;

use crate::error::Result;
use crate::schema::{CsvRow, COLUMNS};

/// Write records to any sink, header first.
///
/// The header is written even when `records` is empty, so the output always
/// reads back.
pub fn write_csv<W: Write>(sink: W, records: &[TradeRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to a file, creating parent directories as needed.
pub fn save_csv(path: impl AsRef<Path>, records: &[TradeRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_csv(File::create(path)?, records)?;
    info!(path = %path.display(), rows = records.len(), "Saved trade dataset");
    Ok(())
}
