//! Categorical feature encoding.
//!
//! Each categorical column maps its distinct labels, sorted byte-wise, to
//! consecutive codes starting at 0. The tables are returned as a
//! [`CategoryMapping`] so a later dataset can be encoded against the same
//! codes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use trade_core::types::TradeRecord;

use crate::error::ModelError;

/// Number of model features per row.
pub const N_FEATURES: usize = 5;

/// Feature names in matrix column order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "year",
    "month",
    "origin_code",
    "destination_code",
    "product_code",
];

/// One record's model inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedFeatureRow {
    /// Calendar year, passed through
    pub year: i32,
    /// Calendar month, passed through
    pub month: u32,
    /// Code of the origin country label
    pub origin_code: u32,
    /// Code of the destination country label
    pub destination_code: u32,
    /// Code of the product category label
    pub product_code: u32,
}

impl EncodedFeatureRow {
    /// The feature vector in [`FEATURE_NAMES`] order.
    pub fn to_features(&self) -> [f64; N_FEATURES] {
        [
            f64::from(self.year),
            f64::from(self.month),
            f64::from(self.origin_code),
            f64::from(self.destination_code),
            f64::from(self.product_code),
        ]
    }
}

/// Label to code tables for the three categorical columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// Origin country label codes
    pub origin_country: BTreeMap<String, u32>,
    /// Destination country label codes
    pub destination_country: BTreeMap<String, u32>,
    /// Product category label codes
    pub product_category: BTreeMap<String, u32>,
}

fn code_table<'a>(labels: impl Iterator<Item = &'a str>) -> BTreeMap<String, u32> {
    let distinct: BTreeSet<&str> = labels.collect();
    distinct
        .into_iter()
        .zip(0u32..)
        .map(|(label, code)| (label.to_string(), code))
        .collect()
}

fn lookup(table: &BTreeMap<String, u32>, column: &'static str, label: &str) -> Result<u32, ModelError> {
    table
        .get(label)
        .copied()
        .ok_or_else(|| ModelError::UnknownCategory {
            column,
            label: label.to_string(),
        })
}

impl CategoryMapping {
    /// Build the code tables from the labels present in `records`.
    pub fn from_records(records: &[TradeRecord]) -> Self {
        Self {
            origin_country: code_table(records.iter().map(TradeRecord::origin_country)),
            destination_country: code_table(records.iter().map(TradeRecord::destination_country)),
            product_category: code_table(records.iter().map(TradeRecord::product_category)),
        }
    }

    /// Encode one record against these tables.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownCategory`] for a label missing from a table.
    pub fn encode_record(&self, record: &TradeRecord) -> Result<EncodedFeatureRow, ModelError> {
        Ok(EncodedFeatureRow {
            year: record.year(),
            month: record.month(),
            origin_code: lookup(&self.origin_country, "Origin_Country", record.origin_country())?,
            destination_code: lookup(
                &self.destination_country,
                "Destination_Country",
                record.destination_country(),
            )?,
            product_code: lookup(
                &self.product_category,
                "Product_Category",
                record.product_category(),
            )?,
        })
    }
}

/// Encoded rows together with the mapping that produced them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedFeatures {
    /// One row per input record, in input order
    pub rows: Vec<EncodedFeatureRow>,
    /// Tables used for the categorical columns
    pub mapping: CategoryMapping,
}

impl EncodedFeatures {
    /// Rows as `f64` feature vectors, ready for fitting.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| row.to_features().to_vec()).collect()
    }
}

/// Turns records into numeric feature rows.
///
/// A fresh encoder derives its tables from the records it is given. An
/// encoder built with [`FeatureEncoder::with_mapping`] reuses persisted
/// tables and rejects labels they do not contain.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trade_core::types::TradeRecord;
/// use trade_model::FeatureEncoder;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 4).unwrap();
/// let records = vec![
///     TradeRecord::new(date, "USA", "China", "Plastics", 10.0, 1.0).unwrap(),
///     TradeRecord::new(date, "China", "Brazil", "Apparel", 20.0, 1.0).unwrap(),
/// ];
///
/// let encoded = FeatureEncoder::new().encode(&records).unwrap();
/// assert_eq!(encoded.rows[0].origin_code, 1);
/// assert_eq!(encoded.rows[1].origin_code, 0);
/// assert_eq!(encoded.rows[1].product_code, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FeatureEncoder {
    mapping: Option<CategoryMapping>,
}

impl FeatureEncoder {
    /// Create an encoder that derives its tables from the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder bound to an existing mapping.
    pub fn with_mapping(mapping: CategoryMapping) -> Self {
        Self {
            mapping: Some(mapping),
        }
    }

    /// Encode every record. The input is never modified.
    ///
    /// # Errors
    ///
    /// With a bound mapping, returns [`ModelError::UnknownCategory`] for the
    /// first label the mapping does not contain.
    pub fn encode(&self, records: &[TradeRecord]) -> Result<EncodedFeatures, ModelError> {
        let mapping = match &self.mapping {
            Some(mapping) => mapping.clone(),
            None => CategoryMapping::from_records(records),
        };

        let rows = records
            .iter()
            .map(|record| mapping.encode_record(record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EncodedFeatures { rows, mapping })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(origin: &str, destination: &str, product: &str) -> TradeRecord {
        let date = NaiveDate::from_ymd_opt(2021, 11, 5).unwrap();
        TradeRecord::new(date, origin, destination, product, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_codes_are_alphabetical_from_zero() {
        let records = vec![
            record("USA", "Japan", "Machinery"),
            record("Brazil", "China", "Apparel"),
            record("Japan", "USA", "Machinery"),
        ];
        let encoded = FeatureEncoder::new().encode(&records).unwrap();

        assert_eq!(encoded.mapping.origin_country["Brazil"], 0);
        assert_eq!(encoded.mapping.origin_country["Japan"], 1);
        assert_eq!(encoded.mapping.origin_country["USA"], 2);
        assert_eq!(encoded.mapping.destination_country["China"], 0);
        assert_eq!(encoded.mapping.product_category["Machinery"], 1);

        let first = encoded.rows[0];
        assert_eq!(first.year, 2021);
        assert_eq!(first.month, 11);
        assert_eq!(first.origin_code, 2);
        assert_eq!(first.destination_code, 1);
        assert_eq!(first.product_code, 1);
    }

    #[test]
    fn test_byte_order_places_uppercase_first() {
        let records = vec![record("south", "A", "p"), record("South", "A", "p")];
        let encoded = FeatureEncoder::new().encode(&records).unwrap();
        assert_eq!(encoded.mapping.origin_country["South"], 0);
        assert_eq!(encoded.mapping.origin_country["south"], 1);
    }

    #[test]
    fn test_to_features_order() {
        let row = EncodedFeatureRow {
            year: 2020,
            month: 4,
            origin_code: 3,
            destination_code: 7,
            product_code: 1,
        };
        assert_eq!(row.to_features(), [2020.0, 4.0, 3.0, 7.0, 1.0]);
    }

    #[test]
    fn test_with_mapping_reuses_codes() {
        let training = vec![record("A", "B", "x"), record("C", "B", "y")];
        let mapping = FeatureEncoder::new().encode(&training).unwrap().mapping;

        let later = vec![record("C", "B", "x")];
        let encoded = FeatureEncoder::with_mapping(mapping.clone())
            .encode(&later)
            .unwrap();
        assert_eq!(encoded.rows[0].origin_code, 1);
        assert_eq!(encoded.mapping, mapping);
    }

    #[test]
    fn test_with_mapping_rejects_unknown_label() {
        let mapping = FeatureEncoder::new()
            .encode(&[record("A", "B", "x")])
            .unwrap()
            .mapping;
        let err = FeatureEncoder::with_mapping(mapping)
            .encode(&[record("A", "B", "z")])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownCategory {
                column: "Product_Category",
                label: "z".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let encoded = FeatureEncoder::new().encode(&[]).unwrap();
        assert!(encoded.rows.is_empty());
        assert!(encoded.mapping.origin_country.is_empty());
    }

    #[test]
    fn test_mapping_serde_round_trip() {
        let mapping = CategoryMapping::from_records(&[record("A", "B", "x")]);
        let json = serde_json::to_string(&mapping).unwrap();
        let back: CategoryMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
