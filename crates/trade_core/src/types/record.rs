//! The trade record row type.
//!
//! A [`TradeRecord`] is one bilateral transaction: a dated shipment of a
//! product category from an origin country to a different destination
//! country, valued in USD and weighed in kilograms.
//!
//! Records are immutable. Every construction path (including serde
//! deserialisation) goes through the same validation, so a value of this type
//! always satisfies:
//!
//! - `origin_country != destination_country`
//! - `trade_volume_usd` and `trade_weight_kg` are finite and `>= 0`
//! - `year` and `month` agree with `date`
//! - categorical labels are non-empty

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// One row of the trade dataset.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trade_core::types::{RecordError, TradeRecord};
///
/// let date = NaiveDate::from_ymd_opt(2021, 11, 3).unwrap();
/// let record = TradeRecord::new(date, "Japan", "Canada", "Machinery", 1250.5, 80.0).unwrap();
/// assert_eq!(record.month(), 11);
///
/// let same = TradeRecord::new(date, "Japan", "Japan", "Machinery", 1.0, 1.0);
/// assert!(matches!(same, Err(RecordError::SameCountry(_))));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TradeRecordParts", into = "TradeRecordParts")]
pub struct TradeRecord {
    date: NaiveDate,
    year: i32,
    month: u32,
    origin_country: String,
    destination_country: String,
    product_category: String,
    trade_volume_usd: f64,
    trade_weight_kg: f64,
}

/// Unvalidated field bundle for building a [`TradeRecord`].
///
/// Used by loaders that read `Year`/`Month` as separate columns; the derived
/// fields are checked against `date` rather than trusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRecordParts {
    /// Transaction date
    pub date: NaiveDate,
    /// Calendar year, must match `date`
    pub year: i32,
    /// Calendar month (1-12), must match `date`
    pub month: u32,
    /// Exporting country label
    pub origin_country: String,
    /// Importing country label
    pub destination_country: String,
    /// Product category label
    pub product_category: String,
    /// Transaction value in USD
    pub trade_volume_usd: f64,
    /// Shipment weight in kilograms
    pub trade_weight_kg: f64,
}

impl TradeRecord {
    /// Creates a record, deriving `year` and `month` from `date`.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] if any record invariant is violated.
    pub fn new(
        date: NaiveDate,
        origin_country: impl Into<String>,
        destination_country: impl Into<String>,
        product_category: impl Into<String>,
        trade_volume_usd: f64,
        trade_weight_kg: f64,
    ) -> Result<Self, RecordError> {
        let origin_country = origin_country.into();
        let destination_country = destination_country.into();
        let product_category = product_category.into();

        check_label("origin_country", &origin_country)?;
        check_label("destination_country", &destination_country)?;
        check_label("product_category", &product_category)?;
        if origin_country == destination_country {
            return Err(RecordError::SameCountry(origin_country));
        }
        check_amount("trade_volume_usd", trade_volume_usd)?;
        check_amount("trade_weight_kg", trade_weight_kg)?;

        Ok(Self {
            date,
            year: date.year(),
            month: date.month(),
            origin_country,
            destination_country,
            product_category,
            trade_volume_usd,
            trade_weight_kg,
        })
    }

    /// Builds a record from externally supplied parts, checking that the
    /// supplied `year` and `month` agree with `date`.
    pub fn from_parts(parts: TradeRecordParts) -> Result<Self, RecordError> {
        let date = parts.date;
        if parts.year != date.year() {
            return Err(RecordError::DerivedFieldMismatch {
                field: "year",
                date,
                expected: i64::from(date.year()),
                found: i64::from(parts.year),
            });
        }
        if parts.month != date.month() {
            return Err(RecordError::DerivedFieldMismatch {
                field: "month",
                date,
                expected: i64::from(date.month()),
                found: i64::from(parts.month),
            });
        }

        Self::new(
            date,
            parts.origin_country,
            parts.destination_country,
            parts.product_category,
            parts.trade_volume_usd,
            parts.trade_weight_kg,
        )
    }

    /// Transaction date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Calendar year of the transaction.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month of the transaction (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Exporting country.
    pub fn origin_country(&self) -> &str {
        &self.origin_country
    }

    /// Importing country.
    pub fn destination_country(&self) -> &str {
        &self.destination_country
    }

    /// Product category.
    pub fn product_category(&self) -> &str {
        &self.product_category
    }

    /// Transaction value in USD.
    pub fn trade_volume_usd(&self) -> f64 {
        self.trade_volume_usd
    }

    /// Shipment weight in kilograms.
    pub fn trade_weight_kg(&self) -> f64 {
        self.trade_weight_kg
    }
}

impl TryFrom<TradeRecordParts> for TradeRecord {
    type Error = RecordError;

    fn try_from(parts: TradeRecordParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl From<TradeRecord> for TradeRecordParts {
    fn from(record: TradeRecord) -> Self {
        Self {
            date: record.date,
            year: record.year,
            month: record.month,
            origin_country: record.origin_country,
            destination_country: record.destination_country,
            product_category: record.product_category,
            trade_volume_usd: record.trade_volume_usd,
            trade_weight_kg: record.trade_weight_kg,
        }
    }
}

/// Sum of `trade_volume_usd` over a slice of records.
pub fn total_volume(records: &[TradeRecord]) -> f64 {
    records.iter().map(TradeRecord::trade_volume_usd).sum()
}

fn check_label(field: &'static str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        Err(RecordError::EmptyLabel(field))
    } else {
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), RecordError> {
    if !value.is_finite() {
        return Err(RecordError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(RecordError::NegativeValue { field, value });
    }
    Ok(())
}
