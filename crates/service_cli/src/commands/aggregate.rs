//! Aggregate command implementation
//!
//! Prints the dashboard rollups (KPIs, country, monthly, product and top
//! routes) for the whole dataset or one year.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use tracing::info;
use trade_analytics::{
    aggregate_by_country, aggregate_by_product, aggregate_by_route, aggregate_monthly,
    available_years, filter_by_year, summarise, CountryAggregate, DatasetSummary,
    MonthlyAggregate, ProductAggregate, RouteAggregate,
};
use trade_core::types::TradeRecord;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Routes listed in the report, by descending volume.
const TOP_ROUTES: usize = 10;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// All rollups for one selection of records.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// Selected year, or `None` for all years
    pub year: Option<i32>,
    /// KPI totals
    pub summary: DatasetSummary,
    /// Bilateral rollup per country
    pub countries: Vec<CountryAggregate>,
    /// Month-end volume series across all years
    pub monthly: Vec<MonthlyAggregate>,
    /// Rollup per product category
    pub products: Vec<ProductAggregate>,
    /// Highest-volume routes
    pub top_routes: Vec<RouteAggregate>,
}

impl AggregateReport {
    /// Build the report over `records`.
    ///
    /// With a `year`, the KPIs and the country, product and route rollups
    /// cover that year only. The monthly series always spans every year so
    /// the trend keeps its context.
    pub fn build(records: &[TradeRecord], year: Option<i32>) -> Self {
        let filtered;
        let selected: &[TradeRecord] = match year {
            Some(year) => {
                filtered = filter_by_year(records, year);
                &filtered
            }
            None => records,
        };

        let mut routes = aggregate_by_route(selected);
        routes.sort_by(|a, b| b.trade_volume_usd.total_cmp(&a.trade_volume_usd));
        routes.truncate(TOP_ROUTES);

        Self {
            year,
            summary: summarise(selected),
            countries: aggregate_by_country(selected),
            monthly: aggregate_monthly(records),
            products: aggregate_by_product(selected),
            top_routes: routes,
        }
    }

    /// Render as plain-text tables.
    pub fn to_table(&self) -> String {
        let scope = self
            .year
            .map_or_else(|| "all years".to_string(), |y| y.to_string());

        let mut out = format!(
            "Trade summary ({})\n  Total volume (USD): {:>18.2}\n  Total weight (KG):  {:>18.2}\n  Transactions:       {:>18}\n",
            scope,
            self.summary.total_volume_usd,
            self.summary.total_weight_kg,
            self.summary.transaction_count
        );

        out.push_str(&format!(
            "\n{:<16} {:>16} {:>16} {:>16}\n",
            "Country", "Exports", "Imports", "Total"
        ));
        for c in &self.countries {
            out.push_str(&format!(
                "{:<16} {:>16.2} {:>16.2} {:>16.2}\n",
                c.country, c.total_export_volume, c.total_import_volume, c.total_trade_volume
            ));
        }

        out.push_str(&format!("\n{:<12} {:>16}\n", "Month end", "Volume"));
        for m in &self.monthly {
            out.push_str(&format!("{:<12} {:>16.2}\n", m.period_end_date, m.trade_volume_usd));
        }

        out.push_str(&format!(
            "\n{:<16} {:>16} {:>16} {:>8}\n",
            "Product", "Volume", "Weight", "Count"
        ));
        for p in &self.products {
            out.push_str(&format!(
                "{:<16} {:>16.2} {:>16.2} {:>8}\n",
                p.product_category, p.trade_volume_usd, p.trade_weight_kg, p.transaction_count
            ));
        }

        out.push_str(&format!("\n{:<30} {:>16} {:>8}\n", "Route", "Volume", "Count"));
        for r in &self.top_routes {
            let route = format!("{} -> {}", r.origin_country, r.destination_country);
            out.push_str(&format!(
                "{:<30} {:>16.2} {:>8}\n",
                route, r.trade_volume_usd, r.transaction_count
            ));
        }

        out
    }
}

/// Run the aggregate command
pub fn run(
    input: Option<&Path>,
    year: Option<i32>,
    format: OutputFormat,
    config: &CliConfig,
) -> Result<()> {
    info!("Aggregating trade data...");
    let dataset = super::resolve_dataset(input, config)?;

    if let Some(year) = year {
        let years = available_years(&dataset);
        if !years.contains(&year) {
            return Err(CliError::invalid_argument(format!(
                "Year {} not present. Available: {:?}",
                year, years
            )));
        }
    }

    let report = AggregateReport::build(&dataset, year);
    info!("  Records selected: {}", report.summary.transaction_count);

    match format {
        OutputFormat::Table => print!("{}", report.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
