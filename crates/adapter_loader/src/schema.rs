//! On-disk column layout.

use serde::{Deserialize, Serialize};
use trade_core::types::{parse_iso_date, TradeRecord, TradeRecordParts};

use crate::error::{LoaderError, Result};

/// Header columns, in the order they are written.
pub const COLUMNS: [&str; 8] = [
    "Date",
    "Year",
    "Month",
    "Origin_Country",
    "Destination_Country",
    "Product_Category",
    "Trade_Volume_USD",
    "Trade_Weight_KG",
];

/// Column names from `COLUMNS` that `headers` does not contain.
pub fn missing_columns<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let present: Vec<&str> = headers.into_iter().collect();
    COLUMNS
        .iter()
        .filter(|column| !present.contains(column))
        .map(|column| column.to_string())
        .collect()
}

/// One CSV row, before record validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CsvRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Origin_Country")]
    pub origin_country: String,
    #[serde(rename = "Destination_Country")]
    pub destination_country: String,
    #[serde(rename = "Product_Category")]
    pub product_category: String,
    #[serde(rename = "Trade_Volume_USD")]
    pub trade_volume_usd: f64,
    #[serde(rename = "Trade_Weight_KG")]
    pub trade_weight_kg: f64,
}

impl CsvRow {
    /// Validate into a record. `line` is used for error reporting.
    pub fn into_record(self, line: u64) -> Result<TradeRecord> {
        // Timestamps written as "2021-03-04 00:00:00" or "2021-03-04T00:00:00"
        // carry the calendar date in their first component.
        let day = self.date.split([' ', 'T']).next().unwrap_or_default();
        let date = parse_iso_date(day).map_err(|e| LoaderError::invalid_row(line, e.to_string()))?;

        TradeRecord::from_parts(TradeRecordParts {
            date,
            year: self.year,
            month: self.month,
            origin_country: self.origin_country,
            destination_country: self.destination_country,
            product_category: self.product_category,
            trade_volume_usd: self.trade_volume_usd,
            trade_weight_kg: self.trade_weight_kg,
        })
        .map_err(|source| LoaderError::Record { line, source })
    }
}

impl From<&TradeRecord> for CsvRow {
    fn from(record: &TradeRecord) -> Self {
        Self {
            date: record.date().format("%Y-%m-%d").to_string(),
            year: record.year(),
            month: record.month(),
            origin_country: record.origin_country().to_string(),
            destination_country: record.destination_country().to_string(),
            product_category: record.product_category().to_string(),
            trade_volume_usd: record.trade_volume_usd(),
            trade_weight_kg: record.trade_weight_kg(),
        }
    }
}
