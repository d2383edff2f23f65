//! Product category rollup.

use std::collections::BTreeMap;

use trade_core::types::TradeRecord;

use crate::types::ProductAggregate;

/// Aggregate volume, weight and transaction count per product category.
///
/// Results are ordered by category label.
pub fn aggregate_by_product(records: &[TradeRecord]) -> Vec<ProductAggregate> {
    let mut by_product: BTreeMap<&str, ProductAggregate> = BTreeMap::new();

    for record in records {
        let entry = by_product
            .entry(record.product_category())
            .or_insert_with(|| ProductAggregate {
                product_category: record.product_category().to_string(),
                trade_volume_usd: 0.0,
                trade_weight_kg: 0.0,
                transaction_count: 0,
            });
        entry.trade_volume_usd += record.trade_volume_usd();
        entry.trade_weight_kg += record.trade_weight_kg();
        entry.transaction_count += 1;
    }

    by_product.into_values().collect()
}
