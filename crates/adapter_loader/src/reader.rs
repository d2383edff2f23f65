//! CSV dataset reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use trade_core::types::TradeDataset;
use tracing::{debug, info};

use crate::error::{LoaderError, Result};
use crate::schema::{missing_columns, CsvRow};

/// Read a dataset from any CSV source.
///
/// Columns are matched by header name; extra columns are ignored. Rows are
/// validated as they are read and the first failure aborts the load.
///
/// # Errors
///
/// - [`LoaderError::MissingColumns`] if a required header is absent
/// - [`LoaderError::InvalidRow`] for a malformed row
/// - [`LoaderError::Record`] for a row violating a record invariant
///
/// # Examples
///
/// ```
/// use adapter_loader::read_csv;
///
/// let data = "\
/// Date,Year,Month,Origin_Country,Destination_Country,Product_Category,Trade_Volume_USD,Trade_Weight_KG
/// 2023-02-01,2023,2,USA,China,Electronics,100.0,5.0
/// 2023-01-15,2023,1,China,USA,Apparel,50.0,2.5
/// ";
/// let dataset = read_csv(data.as_bytes()).unwrap();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset[0].month(), 1);
/// ```
pub fn read_csv<R: Read>(source: R) -> Result<TradeDataset> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let headers = reader.headers()?.clone();
    let missing = missing_columns(headers.iter());
    if !missing.is_empty() {
        return Err(LoaderError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let raw = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            LoaderError::invalid_row(line, e.to_string())
        })?;
        let line = raw.position().map_or(0, |p| p.line());

        let row: CsvRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| LoaderError::invalid_row(line, e.to_string()))?;
        records.push(row.into_record(line)?);
    }

    debug!(rows = records.len(), "Parsed CSV rows");
    Ok(TradeDataset::new(records))
}

/// Read a dataset from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<TradeDataset> {
    let path = path.as_ref();
    let dataset = read_csv(File::open(path)?)?;
    info!(path = %path.display(), rows = dataset.len(), "Loaded trade dataset");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Date,Year,Month,Origin_Country,Destination_Country,Product_Category,Trade_Volume_USD,Trade_Weight_KG";

    fn parse(body: &str) -> Result<TradeDataset> {
        read_csv(format!("{}\n{}", HEADER, body).as_bytes())
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_rows_are_sorted_by_date() {
        let dataset = parse(
            "2022-05-01,2022,5,UK,USA,Plastics,1.0,1.0\n\
             2021-05-01,2021,5,UK,USA,Plastics,2.0,1.0\n",
        )
        .unwrap();
        assert_eq!(dataset[0].year(), 2021);
        assert!(dataset.is_date_ordered());
    }

    #[test]
    fn test_missing_columns_reported() {
        let err = read_csv("Date,Year,Month\n2021-01-01,2021,1\n".as_bytes()).unwrap_err();
        match err {
            LoaderError::MissingColumns(columns) => {
                assert_eq!(columns.len(), 5);
                assert!(columns.contains(&"Trade_Volume_USD".to_string()));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let data = "Trade_Weight_KG,Note,Date,Year,Month,Origin_Country,Destination_Country,Product_Category,Trade_Volume_USD\n\
                    3.5,x,2020-02-29,2020,2,Spain,Mexico,Automotive,42.0\n";
        let dataset = read_csv(data.as_bytes()).unwrap();
        assert_eq!(dataset[0].trade_weight_kg(), 3.5);
        assert_eq!(dataset[0].trade_volume_usd(), 42.0);
    }

    #[test]
    fn test_non_numeric_volume_reports_line() {
        let err = parse(
            "2021-01-01,2021,1,UK,USA,Plastics,1.0,1.0\n\
             2021-01-02,2021,1,UK,USA,Plastics,lots,1.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, LoaderError::InvalidRow { line: 3, .. }), "{}", err);
    }

    #[test]
    fn test_same_country_row_rejected() {
        let err = parse("2021-01-01,2021,1,UK,UK,Plastics,1.0,1.0\n").unwrap_err();
        assert!(matches!(err, LoaderError::Record { line: 2, .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = parse("2021-01-01,2021,1,UK,USA,Plastics,1.0,-1.0\n").unwrap_err();
        assert!(matches!(err, LoaderError::Record { .. }));
    }

    #[test]
    fn test_ragged_row_is_invalid() {
        let err = parse("2021-01-01,2021,1,UK\n").unwrap_err();
        assert!(matches!(err, LoaderError::InvalidRow { .. }), "{}", err);
    }
}
