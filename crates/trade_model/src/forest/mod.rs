//! Bootstrap-aggregated regression trees.
//!
//! Trees are fitted one after another. Tree `i` draws its bootstrap sample
//! and its feature subsets from two separate streams of `seed + i`, neither
//! of which is the plain `seed` stream the train/test split shuffles with.
//! A forest is a pure function of its configuration, seed and training data.

mod tree;

pub use tree::{DecisionTree, Node, TreeConfig};

use serde::{Deserialize, Serialize};
use trade_core::rng::SeededRng;
use tracing::debug;

use crate::error::ModelError;

/// Stream of each tree seed used for its bootstrap sample.
const BOOTSTRAP_STREAM: u64 = 1;

/// Random forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees
    pub n_trees: usize,
    /// Maximum depth of each tree (`None` = unlimited)
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node
    pub min_samples_split: usize,
    /// Minimum samples in each leaf
    pub min_samples_leaf: usize,
    /// Features considered per split (`None` = all)
    pub max_features: Option<usize>,
    /// Fit each tree on a bootstrap resample instead of the full data
    pub bootstrap: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            bootstrap: true,
        }
    }
}

impl ForestConfig {
    /// Set the number of trees.
    pub fn with_n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    /// Set the maximum tree depth.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check every setting.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_trees == 0 {
            return Err(ModelError::invalid_config("n_trees", "must be at least 1"));
        }
        if self.max_depth == Some(0) {
            return Err(ModelError::invalid_config("max_depth", "must be at least 1"));
        }
        if self.min_samples_split < 2 {
            return Err(ModelError::invalid_config(
                "min_samples_split",
                "must be at least 2",
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err(ModelError::invalid_config(
                "min_samples_leaf",
                "must be at least 1",
            ));
        }
        if self.max_features == Some(0) {
            return Err(ModelError::invalid_config(
                "max_features",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    fn tree_config(&self, seed: u64) -> TreeConfig {
        TreeConfig {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            max_features: self.max_features,
            seed,
        }
    }
}

/// An ensemble of regression trees whose prediction is the mean of its
/// members.
///
/// # Examples
///
/// ```
/// use trade_model::forest::{ForestConfig, RandomForest};
///
/// let features: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
/// let targets: Vec<f64> = (0..30).map(|i| if i < 15 { 0.0 } else { 100.0 }).collect();
///
/// let mut forest = RandomForest::new(ForestConfig::default().with_n_trees(10), 7);
/// forest.fit(&features, &targets).unwrap();
///
/// let low = forest.predict_one(&[2.0]).unwrap();
/// let high = forest.predict_one(&[27.0]).unwrap();
/// assert!(low < high);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    config: ForestConfig,
    seed: u64,
    n_features: usize,
    trees: Vec<DecisionTree>,
    feature_importances: Vec<f64>,
}

impl RandomForest {
    /// Create an unfitted forest.
    pub fn new(config: ForestConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            n_features: 0,
            trees: Vec::new(),
            feature_importances: Vec::new(),
        }
    }

    /// Fit on a row-major feature matrix and its targets.
    ///
    /// # Errors
    ///
    /// - [`ModelError::InvalidConfig`] for bad hyperparameters
    /// - [`ModelError::InsufficientData`] for empty or ragged input, or
    ///   mismatched feature and target lengths
    pub fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<(), ModelError> {
        self.config.validate()?;

        let n = features.len();
        if n == 0 {
            return Err(ModelError::insufficient(0, "cannot fit on an empty matrix"));
        }
        if targets.len() != n {
            return Err(ModelError::insufficient(
                n,
                format!("{} feature rows but {} targets", n, targets.len()),
            ));
        }
        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(ModelError::insufficient(n, "feature rows differ in width"));
        }

        debug!(
            rows = n,
            features = n_features,
            trees = self.config.n_trees,
            seed = self.seed,
            "Fitting random forest"
        );

        let all_rows: Vec<usize> = (0..n).collect();
        let mut trees = Vec::with_capacity(self.config.n_trees);
        for i in 0..self.config.n_trees {
            let tree_seed = self.seed.wrapping_add(i as u64);
            let mut tree = DecisionTree::new(self.config.tree_config(tree_seed));
            if self.config.bootstrap {
                let sample = SeededRng::from_stream(tree_seed, BOOTSTRAP_STREAM).bootstrap_indices(n);
                tree.fit(features, targets, &sample);
            } else {
                tree.fit(features, targets, &all_rows);
            }
            trees.push(tree);
        }

        let mut importances = vec![0.0; n_features];
        for tree in &trees {
            for (total, value) in importances.iter_mut().zip(tree.feature_importances()) {
                *total += value;
            }
        }
        let sum: f64 = importances.iter().sum();
        if sum > 0.0 {
            for value in &mut importances {
                *value /= sum;
            }
        }

        self.n_features = n_features;
        self.trees = trees;
        self.feature_importances = importances;
        Ok(())
    }

    /// Mean prediction of all trees for one row.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NotFitted`] before [`fit`](Self::fit) succeeds
    /// - [`ModelError::InvalidConfig`] if the row width differs from training
    pub fn predict_one(&self, row: &[f64]) -> Result<f64, ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if row.len() != self.n_features {
            return Err(ModelError::invalid_config(
                "features",
                format!("expected {} values, got {}", self.n_features, row.len()),
            ));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict_one(row).ok_or(ModelError::NotFitted)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    /// Predict every row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|row| self.predict_one(row)).collect()
    }

    /// Returns `true` once the forest holds fitted trees.
    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    /// Fitted trees.
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Hyperparameters.
    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Normalised mean decrease in squared error per feature.
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }
}
