//! Headline totals and fiscal-year slicing.

use std::collections::BTreeSet;

use trade_core::types::TradeRecord;

use crate::types::DatasetSummary;

/// Total volume, total weight and record count.
///
/// # Examples
///
/// ```
/// use trade_analytics::summarise;
///
/// let summary = summarise(&[]);
/// assert_eq!(summary.transaction_count, 0);
/// assert_eq!(summary.total_volume_usd, 0.0);
/// ```
pub fn summarise(records: &[TradeRecord]) -> DatasetSummary {
    records
        .iter()
        .fold(DatasetSummary::default(), |mut acc, record| {
            acc.total_volume_usd += record.trade_volume_usd();
            acc.total_weight_kg += record.trade_weight_kg();
            acc.transaction_count += 1;
            acc
        })
}

/// Records dated in `year`, preserving input order.
pub fn filter_by_year(records: &[TradeRecord], year: i32) -> Vec<TradeRecord> {
    records
        .iter()
        .filter(|record| record.year() == year)
        .cloned()
        .collect()
}

/// Distinct years present in the records, most recent first.
pub fn available_years(records: &[TradeRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(TradeRecord::year).collect();
    years.into_iter().rev().collect()
}
