//! Central difference with one-sided boundaries.

use super::with_one_sided_ends;

/// Estimate `dy/dx` with summed rise over summed run around each interior point.
///
/// For an interior index `i`:
///
/// ```text
/// d[i] = ((y[i+1] - y[i]) + (y[i] - y[i-1])) / ((x[i+1] - x[i]) + (x[i] - x[i-1]))
/// ```
///
/// The ends use the forward and backward difference, so the output has the
/// same length as the input. This is not the spacing-weighted scheme of
/// [`gradient_derivative`](super::gradient_derivative): the two only coincide
/// when `x[i] - x[i-1] == x[i+1] - x[i]`. With fewer than two samples every
/// entry is NaN.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
pub fn boundary_aware_central_difference(x: &[f64], y: &[f64]) -> Vec<f64> {
    with_one_sided_ends(x, y, |i| {
        let dy_minus = y[i] - y[i - 1];
        let dy_plus = y[i + 1] - y[i];
        let dx_minus = x[i] - x[i - 1];
        let dx_plus = x[i + 1] - x[i];
        (dy_plus + dy_minus) / (dx_plus + dx_minus)
    })
}
