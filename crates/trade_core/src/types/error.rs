//! Error types for structured error handling.
//!
//! This module provides:
//! - `RecordError`: Violations of the trade record invariants
//! - `DateError`: Errors from date construction and parsing

use chrono::NaiveDate;
use thiserror::Error;

/// Trade record invariant violations.
///
/// Raised by [`TradeRecord::new`](crate::types::TradeRecord::new) and
/// [`TradeRecord::from_parts`](crate::types::TradeRecord::from_parts) when a
/// row cannot be represented as a valid record.
///
/// # Examples
/// ```
/// use trade_core::types::RecordError;
///
/// let err = RecordError::SameCountry("USA".to_string());
/// assert_eq!(format!("{}", err), "Origin and destination are the same country: USA");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Origin and destination country are identical.
    #[error("Origin and destination are the same country: {0}")]
    SameCountry(String),

    /// A monetary or weight field is negative.
    #[error("Field {field} must be non-negative, got {value}")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A monetary or weight field is NaN or infinite.
    #[error("Field {field} must be finite")]
    NonFiniteValue {
        /// Name of the offending field
        field: &'static str,
    },

    /// A categorical label is empty or whitespace.
    #[error("Field {0} must not be empty")]
    EmptyLabel(&'static str),

    /// A derived calendar field disagrees with the record date.
    #[error("Field {field} is {found} but date {date} implies {expected}")]
    DerivedFieldMismatch {
        /// Name of the derived field (`year` or `month`)
        field: &'static str,
        /// The record date
        date: NaiveDate,
        /// Value implied by the date
        expected: i64,
        /// Value supplied by the caller
        found: i64,
    },
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use trade_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
