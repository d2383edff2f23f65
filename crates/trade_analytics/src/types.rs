//! Aggregate result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Bilateral volume rollup for one country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryAggregate {
    /// Country label
    pub country: String,
    /// Sum of volume where the country is the origin
    pub total_export_volume: f64,
    /// Sum of volume where the country is the destination
    pub total_import_volume: f64,
    /// Export plus import volume
    pub total_trade_volume: f64,
}

impl CountryAggregate {
    /// Create an aggregate, computing the total from both sides.
    pub fn new(country: impl Into<String>, export: f64, import: f64) -> Self {
        Self {
            country: country.into(),
            total_export_volume: export,
            total_import_volume: import,
            total_trade_volume: export + import,
        }
    }

    /// Share of the country's trade that is exports, or `None` with no trade.
    pub fn export_share(&self) -> Option<f64> {
        (self.total_trade_volume > 0.0).then(|| self.total_export_volume / self.total_trade_volume)
    }
}

/// Volume summed over one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Last calendar day of the month
    pub period_end_date: NaiveDate,
    /// Sum of volume over records dated in the month
    pub trade_volume_usd: f64,
}

/// Totals for one product category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    /// Product category label
    pub product_category: String,
    /// Sum of volume in USD
    pub trade_volume_usd: f64,
    /// Sum of weight in kilograms
    pub trade_weight_kg: f64,
    /// Number of records in the category
    pub transaction_count: usize,
}

/// Totals for one directed trade route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteAggregate {
    /// Exporting country
    pub origin_country: String,
    /// Importing country
    pub destination_country: String,
    /// Sum of volume in USD
    pub trade_volume_usd: f64,
    /// Number of records on the route
    pub transaction_count: usize,
}

/// Headline totals over a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Sum of volume in USD
    pub total_volume_usd: f64,
    /// Sum of weight in kilograms
    pub total_weight_kg: f64,
    /// Number of records
    pub transaction_count: usize,
}
