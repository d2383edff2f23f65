//! # adapter_loader: CSV Dataset Adapter
//!
//! Reads and writes trade datasets as flat CSV files with the header
//!
//! ```text
//! Date,Year,Month,Origin_Country,Destination_Country,Product_Category,Trade_Volume_USD,Trade_Weight_KG
//! ```
//!
//! Column names appear only in this crate. Every row is validated through
//! [`TradeRecord::from_parts`](trade_core::types::TradeRecord::from_parts),
//! so `Year` and `Month` must agree with `Date`.
//!
//! [`load_or_generate`] reads a dataset if the file exists and otherwise
//! synthesises one, writes it and returns it.

#![deny(missing_docs)]

mod error;
mod reader;
mod schema;
mod writer;

use std::path::Path;

use trade_core::types::TradeDataset;
use tracing::info;

pub use error::{LoaderError, Result};
pub use reader::{load_csv, read_csv};
pub use schema::{missing_columns, COLUMNS};
pub use writer::{save_csv, write_csv};

/// Load `path`, or on first run synthesise `row_count` records from `seed`,
/// save them to `path` and return them.
///
/// # Errors
///
/// Propagates read, write and synthesis failures. An existing but invalid
/// file is an error, never silently regenerated.
pub fn load_or_generate(path: impl AsRef<Path>, row_count: usize, seed: u64) -> Result<TradeDataset> {
    let path = path.as_ref();
    if path.exists() {
        return load_csv(path);
    }

    info!(path = %path.display(), rows = row_count, seed, "No dataset found; generating");
    let dataset = trade_synth::generate(row_count, seed)?;
    save_csv(path, &dataset)?;
    Ok(dataset)
}
