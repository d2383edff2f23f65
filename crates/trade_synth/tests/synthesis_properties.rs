//! Property-based tests for synthetic dataset invariants.

use proptest::prelude::*;
use trade_core::types::total_volume;
use trade_synth::{generate, RecordSynthesizer, SynthesisParams, DEFAULT_ROW_COUNT};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Every generated record satisfies the record invariants.
    #[test]
    fn prop_records_satisfy_invariants(seed in any::<u64>(), rows in 0usize..300) {
        let dataset = generate(rows, seed).unwrap();
        prop_assert_eq!(dataset.len(), rows);
        for record in dataset.iter() {
            prop_assert_ne!(record.origin_country(), record.destination_country());
            prop_assert!(record.trade_volume_usd() >= 0.0);
            prop_assert!(record.trade_weight_kg() >= 0.0);
        }
        prop_assert!(dataset.is_date_ordered());
    }

    /// Two runs with the same arguments are identical.
    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>(), rows in 1usize..200) {
        let first = generate(rows, seed).unwrap();
        let second = generate(rows, seed).unwrap();
        prop_assert_eq!(total_volume(&first), total_volume(&second));
        prop_assert_eq!(first, second);
    }
}

/// The default dataset shows the seasonal uplift and the yearly trend.
#[test]
fn test_default_dataset_carries_trend_and_seasonality() {
    let dataset = generate(DEFAULT_ROW_COUNT, 42).unwrap();

    let mean = |pred: &dyn Fn(&trade_core::types::TradeRecord) -> bool| {
        let values: Vec<f64> = dataset
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.trade_volume_usd())
            .collect();
        values.iter().sum::<f64>() / values.len() as f64
    };

    let q4 = mean(&|r| r.month() >= 10);
    let rest = mean(&|r| r.month() < 10);
    assert!(q4 - rest > 1500.0, "Q4 uplift too small: {} vs {}", q4, rest);

    let y2020 = mean(&|r| r.year() == 2020);
    let y2023 = mean(&|r| r.year() == 2023);
    assert!(y2023 - y2020 > 2500.0, "trend too small: {} vs {}", y2023, y2020);
}

/// Generating interleaved datasets with different seeds does not disturb either.
#[test]
fn test_interleaved_generation_is_isolated() {
    let synth = RecordSynthesizer::new(SynthesisParams::default()).unwrap();
    let a1 = synth.generate(50, 1).unwrap();
    let _b = synth.generate(50, 2).unwrap();
    let a2 = synth.generate(50, 1).unwrap();
    assert_eq!(a1, a2);
}
