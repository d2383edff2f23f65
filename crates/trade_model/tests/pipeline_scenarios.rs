//! End-to-end training scenarios over synthetic datasets.

use approx::assert_relative_eq;
use proptest::prelude::*;
use trade_model::{FeatureEncoder, ModelError, PipelineConfig, RegressionPipeline};
use trade_synth::generate;

fn pipeline(trees: usize) -> RegressionPipeline {
    RegressionPipeline::new(PipelineConfig::default().with_n_trees(trees)).unwrap()
}

#[test]
fn test_training_is_reproducible() {
    let records = generate(400, 42).unwrap();
    let first = pipeline(10).train(&records).unwrap();
    let second = pipeline(10).train(&records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_model_explains_structured_volume() {
    let records = generate(1_500, 42).unwrap();
    let model = pipeline(25).train(&records).unwrap();

    assert_eq!(model.test_size, 300);
    assert_eq!(model.train_size, 1_200);
    assert_eq!(model.predictions.len(), 300);
    assert!(model.r_squared > 0.3, "r_squared = {}", model.r_squared);
    assert!(model.mean_absolute_error > 0.0);

    let total: f64 = model.feature_importances.iter().map(|(_, v)| v).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    let names: Vec<&str> = model
        .feature_importances
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(
        names,
        ["year", "month", "origin_code", "destination_code", "product_code"]
    );
}

#[test]
fn test_mapping_is_reusable_on_new_data() {
    let training = generate(300, 1).unwrap();
    let later = generate(50, 2).unwrap();
    let model = pipeline(5).train(&training).unwrap();

    let encoded = FeatureEncoder::with_mapping(model.mapping.clone())
        .encode(&later)
        .unwrap();
    assert_eq!(encoded.rows.len(), 50);

    for record in later.iter() {
        assert!(model.predict(record).unwrap() >= 0.0);
    }
}

#[test]
fn test_encoder_does_not_mutate_input() {
    let records = generate(100, 3).unwrap();
    let before = records.clone();
    let _ = FeatureEncoder::new().encode(&records).unwrap();
    assert_eq!(records, before);
}

#[test]
fn test_model_serialises() {
    let records = generate(120, 5).unwrap();
    let model = pipeline(3).train(&records).unwrap();
    let json = serde_json::to_string(&model).unwrap();
    let back: trade_model::TrainedModel = serde_json::from_str(&json).unwrap();
    assert_eq!(back.mapping, model.mapping);
    assert_eq!(back.test_size, model.test_size);
    assert_relative_eq!(
        back.predict(&records[0]).unwrap(),
        model.predict(&records[0]).unwrap(),
        max_relative = 1e-12
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Held-out size follows ceil(n * 0.2) and R² never exceeds 1.
    #[test]
    fn prop_partition_sizes(seed in any::<u64>(), rows in 10usize..120) {
        let records = generate(rows, seed).unwrap();
        match pipeline(3).train(&records) {
            Ok(model) => {
                let expected = (rows as f64 * 0.2).ceil() as usize;
                prop_assert_eq!(model.test_size, expected);
                prop_assert_eq!(model.train_size + model.test_size, rows);
                prop_assert!(model.r_squared <= 1.0);
                prop_assert!(model.mean_absolute_error >= 0.0);
            }
            Err(ModelError::DegenerateEvaluation { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
