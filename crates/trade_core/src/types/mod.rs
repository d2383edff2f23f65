//! Core trade, calendar and error types.
//!
//! This module provides:
//! - `record`: The immutable [`TradeRecord`] row type
//! - `dataset`: The date-ordered [`TradeDataset`] container
//! - `time`: Month-end resolution and ISO 8601 date parsing
//! - `error`: Structured error types for record construction and date handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod dataset;
pub mod error;
pub mod record;
pub mod time;

pub use dataset::TradeDataset;
pub use error::{DateError, RecordError};
pub use record::{total_volume, TradeRecord, TradeRecordParts};
pub use time::{month_end, parse_iso_date, period_end};
