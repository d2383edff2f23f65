//! Loader error types.

use thiserror::Error;
use trade_core::types::RecordError;
use trade_synth::SynthesisError;

/// Errors raised while reading, writing or bootstrapping a dataset file.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failure outside a specific data row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks required columns.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A data row could not be parsed.
    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow {
        /// 1-based line number in the file
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// A data row parsed but violates a record invariant.
    #[error("Invalid record at line {line}: {source}")]
    Record {
        /// 1-based line number in the file
        line: u64,
        /// The violated invariant
        #[source]
        source: RecordError,
    },

    /// Generating the first-run dataset failed.
    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl LoaderError {
    /// Create an invalid row error
    pub fn invalid_row(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = LoaderError::MissingColumns(vec!["Year".into(), "Month".into()]);
        assert_eq!(err.to_string(), "Missing required columns: Year, Month");
    }

    #[test]
    fn test_record_error_keeps_source() {
        use std::error::Error as _;
        let err = LoaderError::Record {
            line: 4,
            source: RecordError::SameCountry("UK".into()),
        };
        assert!(err.to_string().starts_with("Invalid record at line 4"));
        assert!(err.source().is_some());
    }
}
