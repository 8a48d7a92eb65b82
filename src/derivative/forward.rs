//! Forward finite difference.

use super::{assert_paired, chord_slope};

/// Estimate `dy/dx` with a forward difference between neighbouring samples.
///
/// `d[i] = (y[i+1] - y[i]) / (x[i+1] - x[i])` for `i` in `0..n-1`, so the
/// result is one element shorter than the input and nothing is produced at
/// the last sample. Fewer than two samples give an empty result.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
pub fn forward_difference_derivative(x: &[f64], y: &[f64]) -> Vec<f64> {
    assert_paired(x, y);
    (0..x.len().saturating_sub(1))
        .map(|i| chord_slope(x, y, i))
        .collect()
}
