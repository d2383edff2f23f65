//! Parameters of the volume decomposition.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;

/// Constants of the synthetic volume model.
///
/// `Default` reproduces the reference dataset: a four-year window from
/// 2020-01-01, base volume 10,000 USD, +1,000 USD per year, +2,000 USD from
/// October to December, N(0, 500) noise, and a price of 5 to 20 USD per kg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    /// First calendar day of the sampling window
    pub epoch: NaiveDate,
    /// Largest day offset from `epoch` (inclusive)
    pub window_days: u32,
    /// Constant volume component in USD
    pub base_volume: f64,
    /// Volume added per calendar year elapsed since the epoch year
    pub yearly_trend: f64,
    /// Volume added for months at or after `seasonal_start_month`
    pub seasonal_uplift: f64,
    /// First month (1-12) receiving the seasonal uplift
    pub seasonal_start_month: u32,
    /// Standard deviation of the Gaussian noise term
    pub noise_std_dev: f64,
    /// Price per kilogram range `[low, high)` used to derive weight
    pub price_per_kg_range: (f64, f64),
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            epoch: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN),
            window_days: 365 * 4,
            base_volume: 10_000.0,
            yearly_trend: 1_000.0,
            seasonal_uplift: 2_000.0,
            seasonal_start_month: 10,
            noise_std_dev: 500.0,
            price_per_kg_range: (5.0, 20.0),
        }
    }
}

impl SynthesisParams {
    /// Set the sampling window.
    pub fn with_window(mut self, epoch: NaiveDate, window_days: u32) -> Self {
        self.epoch = epoch;
        self.window_days = window_days;
        self
    }

    /// Set the noise standard deviation.
    pub fn with_noise_std_dev(mut self, noise_std_dev: f64) -> Self {
        self.noise_std_dev = noise_std_dev;
        self
    }

    /// Set the price per kilogram range.
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_per_kg_range = (min, max);
        self
    }

    /// Set the seasonal uplift and the month it starts.
    pub fn with_seasonality(mut self, uplift: f64, start_month: u32) -> Self {
        self.seasonal_uplift = uplift;
        self.seasonal_start_month = start_month;
        self
    }

    /// Validate the parameters.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        let non_negative = [
            ("base_volume", self.base_volume),
            ("yearly_trend", self.yearly_trend),
            ("seasonal_uplift", self.seasonal_uplift),
            ("noise_std_dev", self.noise_std_dev),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SynthesisError::invalid(
                    name,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }

        if !(1..=12).contains(&self.seasonal_start_month) {
            return Err(SynthesisError::invalid(
                "seasonal_start_month",
                format!("must be in 1-12, got {}", self.seasonal_start_month),
            ));
        }

        let (low, high) = self.price_per_kg_range;
        if !low.is_finite() || !high.is_finite() || low <= 0.0 || high <= low {
            return Err(SynthesisError::invalid(
                "price_per_kg_range",
                format!("must satisfy 0 < low < high, got ({}, {})", low, high),
            ));
        }

        if self.last_date().is_none() {
            return Err(SynthesisError::invalid(
                "window_days",
                format!("{} days from {} overflows the calendar", self.window_days, self.epoch),
            ));
        }

        Ok(())
    }

    /// Last date reachable from the epoch, or `None` on calendar overflow.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.epoch
            .checked_add_days(Days::new(u64::from(self.window_days)))
    }

    /// Long-run growth component for a calendar year.
    pub fn year_trend(&self, year: i32) -> f64 {
        f64::from(year - self.epoch.year()) * self.yearly_trend
    }

    /// Seasonal component for a calendar month.
    pub fn seasonal_bump(&self, month: u32) -> f64 {
        if month >= self.seasonal_start_month {
            self.seasonal_uplift
        } else {
            0.0
        }
    }

    /// Noise-free volume for a date and product bias, before clamping.
    pub fn expected_volume(&self, date: NaiveDate, product_bias: f64) -> f64 {
        self.base_volume + self.year_trend(date.year()) + self.seasonal_bump(date.month()) + product_bias
    }
}
