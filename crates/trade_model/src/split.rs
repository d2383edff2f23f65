//! Seeded train/test partitioning.

use trade_core::rng::SeededRng;

use crate::error::ModelError;

/// Row indices of the two partitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Rows used for fitting
    pub train: Vec<usize>,
    /// Rows held out for evaluation
    pub test: Vec<usize>,
}

/// Number of held-out rows for `n` rows: `ceil(n * test_fraction)`.
pub fn test_size(n: usize, test_fraction: f64) -> usize {
    (n as f64 * test_fraction).ceil() as usize
}

/// Shuffle `0..n` with a generator seeded by `seed` and hold out the first
/// [`test_size`] positions.
///
/// # Errors
///
/// - [`ModelError::InvalidConfig`] unless `0 < test_fraction < 1`
/// - [`ModelError::InsufficientData`] for fewer than 2 rows or when either
///   partition would be empty
///
/// # Examples
///
/// ```
/// use trade_model::split::train_test_split;
///
/// let split = train_test_split(10, 0.2, 42).unwrap();
/// assert_eq!(split.test.len(), 2);
/// assert_eq!(split.train.len(), 8);
/// ```
pub fn train_test_split(
    n: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, ModelError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ModelError::invalid_config(
            "test_fraction",
            format!("{} is not in (0, 1)", test_fraction),
        ));
    }
    if n < 2 {
        return Err(ModelError::insufficient(n, "at least 2 rows are required"));
    }

    let held_out = test_size(n, test_fraction);
    if held_out == 0 || held_out >= n {
        return Err(ModelError::insufficient(
            n,
            format!("a test fraction of {} leaves an empty partition", test_fraction),
        ));
    }

    let mut order: Vec<usize> = (0..n).collect();
    SeededRng::from_seed(seed).shuffle(&mut order);
    let train = order.split_off(held_out);

    Ok(TrainTestSplit { train, test: order })
}
