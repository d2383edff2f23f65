//! Regression tree grown by variance reduction.

use serde::{Deserialize, Serialize};
use trade_core::rng::SeededRng;

/// Stream of the tree seed used for per-split feature subsampling.
const FEATURE_STREAM: u64 = 2;

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth (`None` grows until leaves are pure)
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node
    pub min_samples_split: usize,
    /// Minimum samples in each child of a split
    pub min_samples_leaf: usize,
    /// Features considered per split (`None` = all)
    pub max_features: Option<usize>,
    /// Tree seed; feature subsampling draws from its own stream of it
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            seed: 42,
        }
    }
}

/// A fitted tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node predicting the mean of its samples.
    Leaf {
        /// Mean target of the samples
        value: f64,
        /// Samples that reached the node
        n_samples: usize,
    },
    /// Internal node sending `x[feature] <= threshold` left.
    Split {
        /// Feature column index
        feature: usize,
        /// Midpoint between adjacent observed values
        threshold: f64,
        /// Samples that reached the node
        n_samples: usize,
        /// Subtree for `x[feature] <= threshold`
        left: Box<Node>,
        /// Subtree for `x[feature] > threshold`
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, row: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { value, .. } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    node = if row[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Depth of the subtree, counting this node.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in the subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    gain: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Running sums for a set of targets.
#[derive(Clone, Copy, Default)]
struct Moments {
    count: f64,
    sum: f64,
    sum_sq: f64,
}

impl Moments {
    fn push(&mut self, y: f64) {
        self.count += 1.0;
        self.sum += y;
        self.sum_sq += y * y;
    }

    fn minus(self, other: Moments) -> Moments {
        Moments {
            count: self.count - other.count,
            sum: self.sum - other.sum,
            sum_sq: self.sum_sq - other.sum_sq,
        }
    }

    /// Error below which a node counts as pure and a gain as zero.
    fn tolerance(&self) -> f64 {
        1e-12 * self.sum_sq.max(1.0)
    }

    /// Sum of squared deviations from the mean.
    fn sse(&self) -> f64 {
        if self.count == 0.0 {
            return 0.0;
        }
        (self.sum_sq - self.sum * self.sum / self.count).max(0.0)
    }
}

/// A CART-style regression tree.
///
/// Split candidates are midpoints between adjacent distinct values of a
/// feature; the split with the largest reduction in summed squared error
/// wins. Ties keep the first candidate found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    config: TreeConfig,
    root: Option<Node>,
    n_features: usize,
    feature_importances: Vec<f64>,
}

impl DecisionTree {
    /// Create an unfitted tree.
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            root: None,
            n_features: 0,
            feature_importances: Vec::new(),
        }
    }

    /// Fit on the rows selected by `indices` (repeats allowed).
    ///
    /// `features` and `targets` must have equal length and `indices` must be
    /// in range; the forest checks both before calling.
    pub fn fit(&mut self, features: &[Vec<f64>], targets: &[f64], indices: &[usize]) {
        let n_features = features.first().map_or(0, Vec::len);
        self.n_features = n_features;
        self.feature_importances = vec![0.0; n_features];

        let mut rng = SeededRng::from_stream(self.config.seed, FEATURE_STREAM);
        let root = self.grow(features, targets, indices.to_vec(), 0, &mut rng);
        self.root = Some(root);

        let total: f64 = self.feature_importances.iter().sum();
        if total > 0.0 {
            for importance in &mut self.feature_importances {
                *importance /= total;
            }
        }
    }

    fn grow(
        &mut self,
        features: &[Vec<f64>],
        targets: &[f64],
        indices: Vec<usize>,
        depth: usize,
        rng: &mut SeededRng,
    ) -> Node {
        let mut moments = Moments::default();
        for &i in &indices {
            moments.push(targets[i]);
        }
        let n_samples = indices.len();
        let mean = if n_samples == 0 {
            0.0
        } else {
            moments.sum / moments.count
        };
        let leaf = Node::Leaf {
            value: mean,
            n_samples,
        };

        let depth_reached = self.config.max_depth.is_some_and(|max| depth >= max);
        if depth_reached
            || n_samples < self.config.min_samples_split
            || n_samples < 2 * self.config.min_samples_leaf
            || moments.sse() <= moments.tolerance()
        {
            return leaf;
        }

        let Some(best) = self.best_split(features, targets, &indices, moments, rng) else {
            return leaf;
        };

        self.feature_importances[best.feature] += best.gain;
        let left = self.grow(features, targets, best.left, depth + 1, rng);
        let right = self.grow(features, targets, best.right, depth + 1, rng);

        Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            n_samples,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn candidate_features(&self, n_features: usize, rng: &mut SeededRng) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..n_features).collect();
        if let Some(max) = self.config.max_features {
            if max < n_features {
                rng.shuffle(&mut candidates);
                candidates.truncate(max);
                candidates.sort_unstable();
            }
        }
        candidates
    }

    fn best_split(
        &self,
        features: &[Vec<f64>],
        targets: &[f64],
        indices: &[usize],
        parent: Moments,
        rng: &mut SeededRng,
    ) -> Option<BestSplit> {
        let n_features = features.first().map_or(0, Vec::len);
        let min_leaf = self.config.min_samples_leaf.max(1);
        let parent_sse = parent.sse();

        let mut best: Option<(usize, f64, f64)> = None;
        let mut order = indices.to_vec();

        for feature in self.candidate_features(n_features, rng) {
            order.sort_by(|&a, &b| features[a][feature].total_cmp(&features[b][feature]));

            let mut left = Moments::default();
            for n_left in 1..order.len() {
                left.push(targets[order[n_left - 1]]);

                let here = features[order[n_left - 1]][feature];
                let next = features[order[n_left]][feature];
                if here == next {
                    continue;
                }
                if n_left < min_leaf || order.len() - n_left < min_leaf {
                    continue;
                }

                let gain = parent_sse - left.sse() - parent.minus(left).sse();
                if gain > best.map_or(parent.tolerance(), |(_, _, g)| g) {
                    best = Some((feature, (here + next) / 2.0, gain));
                }
            }
        }

        let (feature, threshold, gain) = best?;
        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| features[i][feature] <= threshold);

        Some(BestSplit {
            feature,
            threshold,
            gain,
            left,
            right,
        })
    }

    /// Predict one row.
    ///
    /// Returns `None` before fitting or when `row` is not as wide as the
    /// training rows.
    pub fn predict_one(&self, row: &[f64]) -> Option<f64> {
        if row.len() != self.n_features {
            return None;
        }
        self.root.as_ref().map(|root| root.predict(row))
    }

    /// Root node, or `None` before fitting.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Per-feature share of total error reduction, summing to 1 when any
    /// split was made.
    pub fn feature_importances(&self) -> &[f64] {
        &self.feature_importances
    }
}
