//! Month-end resampling of trade volume.

use std::borrow::Cow;

use trade_core::types::dataset::is_date_ordered;
use trade_core::types::{month_end, TradeRecord};
use tracing::debug;

use crate::types::MonthlyAggregate;

/// Resample volume to calendar months.
///
/// Records are bucketed by (year, month) and summed in date order. Only
/// months containing at least one record appear; gaps are not zero-filled.
/// Output is chronological with each entry stamped at its month end.
///
/// Input that is not date-ordered is sorted on a private copy first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trade_analytics::aggregate_monthly;
/// use trade_core::types::TradeRecord;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let records = vec![
///     TradeRecord::new(d(2023, 1, 15), "A", "B", "Apparel", 100.0, 1.0).unwrap(),
///     TradeRecord::new(d(2023, 1, 15), "B", "A", "Apparel", 100.0, 1.0).unwrap(),
///     TradeRecord::new(d(2023, 2, 1), "A", "C", "Apparel", 100.0, 1.0).unwrap(),
/// ];
///
/// let monthly = aggregate_monthly(&records);
/// assert_eq!(monthly.len(), 2);
/// assert_eq!(monthly[0].period_end_date, d(2023, 1, 31));
/// assert_eq!(monthly[0].trade_volume_usd, 200.0);
/// assert_eq!(monthly[1].period_end_date, d(2023, 2, 28));
/// assert_eq!(monthly[1].trade_volume_usd, 100.0);
/// ```
pub fn aggregate_monthly(records: &[TradeRecord]) -> Vec<MonthlyAggregate> {
    let ordered: Cow<'_, [TradeRecord]> = if is_date_ordered(records) {
        Cow::Borrowed(records)
    } else {
        debug!(rows = records.len(), "Sorting unordered records before monthly resample");
        let mut sorted = records.to_vec();
        sorted.sort_by_key(TradeRecord::date);
        Cow::Owned(sorted)
    };

    let mut buckets: Vec<MonthlyAggregate> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for record in ordered.iter() {
        let key = (record.year(), record.month());
        if current == Some(key) {
            if let Some(bucket) = buckets.last_mut() {
                bucket.trade_volume_usd += record.trade_volume_usd();
                continue;
            }
        }

        // Month end only fails past chrono's last representable year,
        // where the record's own date is the latest possible stamp.
        let period_end_date = month_end(key.0, key.1).unwrap_or(record.date());
        buckets.push(MonthlyAggregate {
            period_end_date,
            trade_volume_usd: record.trade_volume_usd(),
        });
        current = Some(key);
    }

    buckets
}
