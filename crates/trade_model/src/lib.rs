//! # trade_model: Trade Volume Regression
//!
//! Predicts transaction-level USD volume from categorical and calendar
//! features.
//!
//! ## Pipeline
//!
//! 1. [`FeatureEncoder`] turns records into `[year, month, origin_code,
//!    destination_code, product_code]` rows and returns the
//!    [`CategoryMapping`] that produced the codes
//! 2. [`split::train_test_split`] shuffles row indices with an owned seeded
//!    generator and holds out `ceil(n * test_fraction)` rows
//! 3. [`forest::RandomForest`] fits bootstrap-aggregated regression trees on
//!    the training rows
//! 4. [`metrics`] scores the held-out predictions (R², MAE)
//!
//! [`RegressionPipeline::train`] runs all four and returns a
//! [`TrainedModel`].
//!
//! ## Usage
//!
//! ```rust
//! use trade_model::{ModelError, PipelineConfig, RegressionPipeline};
//!
//! let records = trade_synth::generate(300, 7).unwrap();
//! let pipeline = RegressionPipeline::new(PipelineConfig::default().with_n_trees(10)).unwrap();
//! let model = pipeline.train(&records).unwrap();
//!
//! let predicted = model.predict(&records[0]).unwrap();
//! assert!(predicted.is_finite());
//!
//! assert!(matches!(
//!     pipeline.train(&records[..1]),
//!     Err(ModelError::InsufficientData { .. })
//! ));
//! ```

#![deny(missing_docs)]

pub mod encoder;
pub mod error;
pub mod forest;
pub mod metrics;
pub mod pipeline;
pub mod split;

pub use encoder::{CategoryMapping, EncodedFeatureRow, EncodedFeatures, FeatureEncoder};
pub use error::ModelError;
pub use pipeline::{train, PipelineConfig, RegressionPipeline, TrainedModel};
