//! # trade_analytics: Trade Dataset Rollups
//!
//! Pure functions turning a slice of [`TradeRecord`](trade_core::types::TradeRecord)s
//! into the aggregates a dashboard renders:
//!
//! - [`aggregate_by_country`]: bilateral export/import/total volume per country
//! - [`aggregate_monthly`]: month-end resampled volume time series
//! - [`aggregate_by_product`]: volume, weight and count per product category
//! - [`aggregate_by_route`]: volume and count per origin→destination pair
//! - [`summarise`]: headline totals (volume, weight, transaction count)
//! - [`filter_by_year`] / [`available_years`]: fiscal-year slicing
//!
//! Every function accepts an empty slice and returns an empty (or zeroed)
//! result. None of them mutate their input.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trade_analytics::{aggregate_by_country, aggregate_monthly};
//! use trade_core::types::TradeRecord;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
//! let records = vec![TradeRecord::new(date, "A", "B", "Electronics", 50.0, 5.0).unwrap()];
//!
//! let countries = aggregate_by_country(&records);
//! assert_eq!(countries.len(), 2);
//! assert_eq!(aggregate_monthly(&records)[0].trade_volume_usd, 50.0);
//! ```

#![deny(missing_docs)]

mod country;
mod monthly;
mod product;
mod route;
mod summary;
mod types;

pub use country::aggregate_by_country;
pub use monthly::aggregate_monthly;
pub use product::aggregate_by_product;
pub use route::aggregate_by_route;
pub use summary::{available_years, filter_by_year, summarise};
pub use types::{
    CountryAggregate, DatasetSummary, MonthlyAggregate, ProductAggregate, RouteAggregate,
};
