//! Directed trade route rollup.

use std::collections::BTreeMap;

use trade_core::types::TradeRecord;

use crate::types::RouteAggregate;

/// Aggregate volume and count per (origin, destination) pair.
///
/// `A → B` and `B → A` are distinct routes. Results are ordered by origin,
/// then destination.
pub fn aggregate_by_route(records: &[TradeRecord]) -> Vec<RouteAggregate> {
    let mut by_route: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = by_route
            .entry((record.origin_country(), record.destination_country()))
            .or_insert((0.0, 0));
        entry.0 += record.trade_volume_usd();
        entry.1 += 1;
    }

    by_route
        .into_iter()
        .map(|((origin, destination), (volume, count))| RouteAggregate {
            origin_country: origin.to_string(),
            destination_country: destination.to_string(),
            trade_volume_usd: volume,
            transaction_count: count,
        })
        .collect()
}
