//! End-to-end volume regression: encode, split, fit, evaluate.

use serde::{Deserialize, Serialize};
use trade_core::types::TradeRecord;
use tracing::{debug, info};

use crate::encoder::{CategoryMapping, FeatureEncoder, FEATURE_NAMES};
use crate::error::ModelError;
use crate::forest::{ForestConfig, RandomForest};
use crate::metrics::{mean_absolute_error, r_squared};
use crate::split::train_test_split;

/// Default seed for the split and the forest.
pub const DEFAULT_SEED: u64 = 42;

/// Default share of rows held out for evaluation.
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;

/// Pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Seed for the shuffle and for tree `i` (as `seed + i`)
    pub seed: u64,
    /// Share of rows held out, in (0, 1)
    pub test_fraction: f64,
    /// Forest hyperparameters
    pub forest: ForestConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            test_fraction: DEFAULT_TEST_FRACTION,
            forest: ForestConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of trees.
    pub fn with_n_trees(mut self, n_trees: usize) -> Self {
        self.forest.n_trees = n_trees;
        self
    }

    /// Set the held-out fraction.
    pub fn with_test_fraction(mut self, test_fraction: f64) -> Self {
        self.test_fraction = test_fraction;
        self
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ModelError::invalid_config(
                "test_fraction",
                format!("{} is not in (0, 1)", self.test_fraction),
            ));
        }
        self.forest.validate()
    }
}

/// A fitted model with its held-out evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// The fitted forest
    pub forest: RandomForest,
    /// Category codes the forest was trained with
    pub mapping: CategoryMapping,
    /// Coefficient of determination on the held-out rows
    pub r_squared: f64,
    /// Mean absolute error on the held-out rows, in USD
    pub mean_absolute_error: f64,
    /// Held-out `(actual, predicted)` volume pairs
    pub predictions: Vec<(f64, f64)>,
    /// Rows used for fitting
    pub train_size: usize,
    /// Rows held out
    pub test_size: usize,
    /// Normalised importance per feature, in matrix column order
    pub feature_importances: Vec<(String, f64)>,
}

impl TrainedModel {
    /// Predict the volume of a new record.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownCategory`] when the record carries a label
    /// the model never saw.
    pub fn predict(&self, record: &TradeRecord) -> Result<f64, ModelError> {
        let row = self.mapping.encode_record(record)?;
        self.forest.predict_one(&row.to_features())
    }
}

/// Trains a volume regressor from trade records.
///
/// # Examples
///
/// ```
/// use trade_model::{PipelineConfig, RegressionPipeline};
///
/// let records = trade_synth::generate(200, 42).unwrap();
/// let pipeline = RegressionPipeline::new(PipelineConfig::default().with_n_trees(10)).unwrap();
/// let model = pipeline.train(&records).unwrap();
///
/// assert_eq!(model.test_size, 40);
/// assert_eq!(model.train_size, 160);
/// assert!(model.r_squared <= 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegressionPipeline {
    config: PipelineConfig,
}

impl RegressionPipeline {
    /// Create a pipeline after validating its settings.
    pub fn new(config: PipelineConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Encode, split, fit and evaluate.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InsufficientData`] for fewer than 2 rows or an empty
    ///   partition
    /// - [`ModelError::ConstantTarget`] when every volume is identical
    /// - [`ModelError::DegenerateEvaluation`] when the held-out volumes are
    ///   identical
    pub fn train(&self, records: &[TradeRecord]) -> Result<TrainedModel, ModelError> {
        let n = records.len();
        if n < 2 {
            return Err(ModelError::insufficient(n, "at least 2 rows are required"));
        }

        let targets: Vec<f64> = records.iter().map(TradeRecord::trade_volume_usd).collect();
        let first = targets[0];
        if targets.iter().all(|&y| y == first) {
            return Err(ModelError::ConstantTarget {
                value: first,
                rows: n,
            });
        }

        let encoded = FeatureEncoder::new().encode(records)?;
        let matrix = encoded.matrix();
        let split = train_test_split(n, self.config.test_fraction, self.config.seed)?;
        debug!(
            train = split.train.len(),
            test = split.test.len(),
            seed = self.config.seed,
            "Partitioned rows"
        );

        let train_x: Vec<Vec<f64>> = split.train.iter().map(|&i| matrix[i].clone()).collect();
        let train_y: Vec<f64> = split.train.iter().map(|&i| targets[i]).collect();

        let mut forest = RandomForest::new(self.config.forest, self.config.seed);
        forest.fit(&train_x, &train_y)?;

        let predictions = split
            .test
            .iter()
            .map(|&i| Ok((targets[i], forest.predict_one(&matrix[i])?)))
            .collect::<Result<Vec<_>, ModelError>>()?;

        let r_squared = r_squared(&predictions).ok_or(ModelError::DegenerateEvaluation {
            test_size: predictions.len(),
        })?;
        let mean_absolute_error = mean_absolute_error(&predictions);

        info!(
            rows = n,
            trees = self.config.forest.n_trees,
            r_squared,
            mean_absolute_error,
            "Trained volume regressor"
        );

        let feature_importances = FEATURE_NAMES
            .iter()
            .zip(forest.feature_importances())
            .map(|(name, &value)| (name.to_string(), value))
            .collect();

        Ok(TrainedModel {
            forest,
            mapping: encoded.mapping,
            r_squared,
            mean_absolute_error,
            predictions,
            train_size: split.train.len(),
            test_size: split.test.len(),
            feature_importances,
        })
    }
}

/// Train with the default configuration.
pub fn train(records: &[TradeRecord]) -> Result<TrainedModel, ModelError> {
    RegressionPipeline::default().train(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, origin: &str, volume: f64) -> TradeRecord {
        let date = NaiveDate::from_ymd_opt(2022, 1, day).unwrap();
        TradeRecord::new(date, origin, "Spain", "Apparel", volume, 1.0).unwrap()
    }

    fn small() -> RegressionPipeline {
        RegressionPipeline::new(PipelineConfig::default().with_n_trees(5)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.forest.n_trees, 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PipelineConfig::default().with_test_fraction(1.5);
        assert!(matches!(
            RegressionPipeline::new(config),
            Err(ModelError::InvalidConfig {
                field: "test_fraction",
                ..
            })
        ));
        assert!(RegressionPipeline::new(PipelineConfig::default().with_n_trees(0)).is_err());
    }

    #[test]
    fn test_too_few_rows() {
        assert!(matches!(
            small().train(&[]),
            Err(ModelError::InsufficientData { rows: 0, .. })
        ));
        assert!(matches!(
            small().train(&[record(1, "USA", 5.0)]),
            Err(ModelError::InsufficientData { rows: 1, .. })
        ));
    }

    #[test]
    fn test_constant_target() {
        let records: Vec<TradeRecord> = (1..=20).map(|d| record(d, "USA", 700.0)).collect();
        assert_eq!(
            small().train(&records),
            Err(ModelError::ConstantTarget {
                value: 700.0,
                rows: 20
            })
        );
    }

    #[test]
    fn test_degenerate_held_out_partition() {
        // Two rows: the single held-out row has zero variance on its own.
        let records = vec![record(1, "USA", 1.0), record(2, "Japan", 2.0)];
        assert_eq!(
            small().train(&records),
            Err(ModelError::DegenerateEvaluation { test_size: 1 })
        );
    }

    #[test]
    fn test_predict_unknown_label() {
        let records: Vec<TradeRecord> = (1..=20)
            .map(|d| record(d, if d % 2 == 0 { "USA" } else { "Japan" }, d as f64))
            .collect();
        let model = small().train(&records).unwrap();
        assert!(model.predict(&records[0]).is_ok());
        assert!(matches!(
            model.predict(&record(3, "Atlantis", 1.0)),
            Err(ModelError::UnknownCategory { .. })
        ));
    }
}
