//! Regression evaluation metrics over `(actual, predicted)` pairs.

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// Returns `None` for an empty input or when the actual values have zero
/// variance, where the ratio is undefined.
///
/// # Examples
///
/// ```
/// use trade_model::metrics::r_squared;
///
/// let pairs = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
/// assert_eq!(r_squared(&pairs), Some(1.0));
/// assert_eq!(r_squared(&[(5.0, 4.0), (5.0, 6.0)]), None);
/// ```
pub fn r_squared(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.is_empty() {
        return None;
    }
    let mean = pairs.iter().map(|(actual, _)| actual).sum::<f64>() / pairs.len() as f64;
    let ss_tot: f64 = pairs.iter().map(|(actual, _)| (actual - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return None;
    }
    let ss_res: f64 = pairs
        .iter()
        .map(|(actual, predicted)| (actual - predicted).powi(2))
        .sum();
    Some(1.0 - ss_res / ss_tot)
}

/// Mean absolute error, or `0.0` for an empty input.
pub fn mean_absolute_error(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    pairs
        .iter()
        .map(|(actual, predicted)| (actual - predicted).abs())
        .sum::<f64>()
        / pairs.len() as f64
}
