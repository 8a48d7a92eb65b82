//! Second-order numerical gradient.

use super::with_one_sided_ends;

/// Estimate `dy/dx` at every sample with a spacing-weighted central difference.
///
/// For an interior index `i`, with `h_minus = x[i] - x[i-1]` and
/// `h_plus = x[i+1] - x[i]`:
///
/// ```text
/// d[i] = (h_minus² (y[i+1] - y[i]) + h_plus² (y[i] - y[i-1]))
///        / (h_minus h_plus (h_minus + h_plus))
/// ```
///
/// which is exact for quadratics even under non-uniform spacing. The first
/// and last points use the forward and backward difference. The output has
/// the same length as the input; with fewer than two samples every entry is
/// NaN.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
pub fn gradient_derivative(x: &[f64], y: &[f64]) -> Vec<f64> {
    with_one_sided_ends(x, y, |i| {
        let h_minus = x[i] - x[i - 1];
        let h_plus = x[i + 1] - x[i];
        (h_minus * h_minus * (y[i + 1] - y[i]) + h_plus * h_plus * (y[i] - y[i - 1]))
            / (h_minus * h_plus * (h_minus + h_plus))
    })
}
