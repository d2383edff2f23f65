//! Record synthesiser.

use chrono::Days;
use trade_core::catalogue::{COUNTRIES, PRODUCTS};
use trade_core::rng::SeededRng;
use trade_core::types::{TradeDataset, TradeRecord};
use tracing::debug;

use crate::error::SynthesisError;
use crate::params::SynthesisParams;

/// Row count used when the caller does not specify one.
pub const DEFAULT_ROW_COUNT: usize = 5000;

/// Seed used when the caller does not specify one.
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic synthetic trade record generator.
///
/// Holds validated [`SynthesisParams`]. Each call to
/// [`generate`](Self::generate) builds its own [`SeededRng`], so calls with
/// the same arguments return identical datasets regardless of what else ran
/// in the process.
///
/// # Examples
///
/// ```rust
/// use trade_synth::{RecordSynthesizer, SynthesisParams};
///
/// let synth = RecordSynthesizer::new(SynthesisParams::default().with_noise_std_dev(0.0)).unwrap();
/// let dataset = synth.generate(10, 7).unwrap();
/// assert_eq!(dataset.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    params: SynthesisParams,
}

impl RecordSynthesizer {
    /// Create a synthesiser, validating the parameters.
    pub fn new(params: SynthesisParams) -> Result<Self, SynthesisError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters in use.
    pub fn params(&self) -> &SynthesisParams {
        &self.params
    }

    /// Generate `row_count` records from `seed`, sorted ascending by date.
    ///
    /// A `row_count` of zero yields an empty dataset.
    pub fn generate(&self, row_count: usize, seed: u64) -> Result<TradeDataset, SynthesisError> {
        debug!(row_count, seed, "Synthesising trade records");

        let mut rng = SeededRng::from_seed(seed);
        let records = (0..row_count)
            .map(|_| self.synthesise_one(&mut rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TradeDataset::new(records))
    }

    fn synthesise_one(&self, rng: &mut SeededRng) -> Result<TradeRecord, SynthesisError> {
        let params = &self.params;

        let offset = rng.gen_index_inclusive(params.window_days);
        let date = params
            .epoch
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| SynthesisError::invalid("window_days", "day offset overflows the calendar"))?;

        let origin_idx = rng.gen_index(COUNTRIES.len());
        // Draw from the other fourteen countries by skipping over the origin.
        let mut destination_idx = rng.gen_index(COUNTRIES.len() - 1);
        if destination_idx >= origin_idx {
            destination_idx += 1;
        }
        let product = PRODUCTS[rng.gen_index(PRODUCTS.len())];

        let noise = rng.gen_normal(0.0, params.noise_std_dev);
        let volume = (params.expected_volume(date, product.volume_bias) + noise).max(0.0);

        let (low, high) = params.price_per_kg_range;
        let price_per_kg = rng.gen_range_f64(low, high);
        let weight = volume / price_per_kg;

        let record = TradeRecord::new(
            date,
            COUNTRIES[origin_idx],
            COUNTRIES[destination_idx],
            product.name,
            round_cents(volume),
            round_cents(weight),
        )?;
        Ok(record)
    }
}

impl Default for RecordSynthesizer {
    fn default() -> Self {
        Self {
            params: SynthesisParams::default(),
        }
    }
}

/// Generate `row_count` records from `seed` with the default parameters.
pub fn generate(row_count: usize, seed: u64) -> Result<TradeDataset, SynthesisError> {
    RecordSynthesizer::default().generate(row_count, seed)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use trade_core::catalogue::product_bias;
    use trade_core::types::total_volume;

    #[test]
    fn test_zero_rows_is_empty() {
        let dataset = generate(0, 42).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_row_count_respected() {
        assert_eq!(generate(250, 1).unwrap().len(), 250);
    }

    #[test]
    fn test_same_seed_same_sum() {
        let a = generate(100, 42).unwrap();
        let b = generate(100, 42).unwrap();
        assert_eq!(total_volume(&a), total_volume(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        assert_ne!(generate(50, 1).unwrap(), generate(50, 2).unwrap());
    }

    #[test]
    fn test_dates_within_window_and_sorted() {
        let params = SynthesisParams::default();
        let last = params.last_date().unwrap();
        let dataset = generate(2000, 11).unwrap();

        assert!(dataset.is_date_ordered());
        for record in dataset.iter() {
            assert!(record.date() >= params.epoch && record.date() <= last);
        }
    }

    #[test]
    fn test_categories_come_from_catalogue() {
        let dataset = generate(500, 5).unwrap();
        for record in dataset.iter() {
            assert!(COUNTRIES.contains(&record.origin_country()));
            assert!(COUNTRIES.contains(&record.destination_country()));
            assert_ne!(record.origin_country(), record.destination_country());
            assert!(product_bias(record.product_category()).is_some());
        }
    }

    #[test]
    fn test_values_rounded_to_cents() {
        for record in generate(200, 3).unwrap().iter() {
            let cents = record.trade_volume_usd() * 100.0;
            assert_relative_eq!(cents, cents.round(), epsilon = 1e-6);
            let hundredths = record.trade_weight_kg() * 100.0;
            assert_relative_eq!(hundredths, hundredths.round(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_noise_free_volume_matches_decomposition() {
        let params = SynthesisParams::default().with_noise_std_dev(0.0);
        let synth = RecordSynthesizer::new(params.clone()).unwrap();

        for record in synth.generate(300, 9).unwrap().iter() {
            let bias = product_bias(record.product_category()).unwrap();
            let expected = params.expected_volume(record.date(), bias);
            assert_relative_eq!(record.trade_volume_usd(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_weight_implies_price_in_range() {
        let params = SynthesisParams::default().with_noise_std_dev(0.0);
        let synth = RecordSynthesizer::new(params).unwrap();

        for record in synth.generate(300, 13).unwrap().iter() {
            let price = record.trade_volume_usd() / record.trade_weight_kg();
            // Rounding the weight to 0.01 kg moves the implied price slightly.
            assert!(price > 4.99 && price < 20.01, "implied price {}", price);
        }
    }

    #[test]
    fn test_clamp_at_zero() {
        // A huge noise term drives many raw volumes negative.
        let params = SynthesisParams {
            base_volume: 0.0,
            yearly_trend: 0.0,
            seasonal_uplift: 0.0,
            noise_std_dev: 1_000_000.0,
            ..SynthesisParams::default()
        };
        let synth = RecordSynthesizer::new(params).unwrap();
        let dataset = synth.generate(400, 21).unwrap();

        assert!(dataset.iter().all(|r| r.trade_volume_usd() >= 0.0));
        assert!(dataset.iter().all(|r| r.trade_weight_kg() >= 0.0));
        assert!(dataset.iter().any(|r| r.trade_volume_usd() == 0.0));
    }

    #[test]
    fn test_single_day_window() {
        let epoch = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        let synth = RecordSynthesizer::new(SynthesisParams::default().with_window(epoch, 0)).unwrap();
        let dataset = synth.generate(20, 4).unwrap();
        assert!(dataset.iter().all(|r| r.date() == epoch));
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let params = SynthesisParams::default().with_price_range(-1.0, 2.0);
        assert!(RecordSynthesizer::new(params).is_err());
    }
}
