//! Bilateral country rollup.

use std::collections::BTreeMap;

use trade_core::types::TradeRecord;

use crate::types::CountryAggregate;

#[derive(Default)]
struct Sides {
    export: f64,
    import: f64,
}

/// Aggregate volume per country by role.
///
/// Export totals group by origin, import totals by destination. The two
/// groupings are outer-merged: a country seen on only one side gets 0 on the
/// other. Results are ordered by country label.
///
/// Each record contributes its volume exactly once to the export side and
/// once to the import side, so both column sums equal the dataset total.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trade_analytics::{aggregate_by_country, CountryAggregate};
/// use trade_core::types::TradeRecord;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let records = vec![TradeRecord::new(date, "A", "B", "Apparel", 50.0, 2.0).unwrap()];
///
/// assert_eq!(
///     aggregate_by_country(&records),
///     vec![CountryAggregate::new("A", 50.0, 0.0), CountryAggregate::new("B", 0.0, 50.0)]
/// );
/// ```
pub fn aggregate_by_country(records: &[TradeRecord]) -> Vec<CountryAggregate> {
    let mut by_country: BTreeMap<&str, Sides> = BTreeMap::new();

    for record in records {
        by_country
            .entry(record.origin_country())
            .or_default()
            .export += record.trade_volume_usd();
        by_country
            .entry(record.destination_country())
            .or_default()
            .import += record.trade_volume_usd();
    }

    by_country
        .into_iter()
        .map(|(country, sides)| CountryAggregate::new(country, sides.export, sides.import))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn record(origin: &str, destination: &str, volume: f64) -> TradeRecord {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        TradeRecord::new(date, origin, destination, "Machinery", volume, 1.0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_country(&[]).is_empty());
    }

    #[test]
    fn test_single_record() {
        let result = aggregate_by_country(&[record("A", "B", 50.0)]);
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].country, "A");
        assert_eq!(result[0].total_export_volume, 50.0);
        assert_eq!(result[0].total_import_volume, 0.0);
        assert_eq!(result[0].total_trade_volume, 50.0);

        assert_eq!(result[1].country, "B");
        assert_eq!(result[1].total_export_volume, 0.0);
        assert_eq!(result[1].total_import_volume, 50.0);
        assert_eq!(result[1].total_trade_volume, 50.0);
    }

    #[test]
    fn test_both_sides_accumulate() {
        let records = vec![
            record("USA", "China", 100.0),
            record("China", "USA", 40.0),
            record("USA", "Japan", 10.0),
        ];
        let result = aggregate_by_country(&records);
        let usa = result.iter().find(|c| c.country == "USA").unwrap();
        assert_relative_eq!(usa.total_export_volume, 110.0);
        assert_relative_eq!(usa.total_import_volume, 40.0);
        assert_relative_eq!(usa.total_trade_volume, 150.0);
        assert_relative_eq!(usa.export_share().unwrap(), 110.0 / 150.0);

        let japan = result.iter().find(|c| c.country == "Japan").unwrap();
        assert_eq!(japan.total_export_volume, 0.0);
        assert_eq!(japan.total_import_volume, 10.0);
    }

    #[test]
    fn test_zero_volume_country_has_no_export_share() {
        let result = aggregate_by_country(&[record("A", "B", 0.0)]);
        assert!(result.iter().all(|c| c.export_share().is_none()));
    }
}
