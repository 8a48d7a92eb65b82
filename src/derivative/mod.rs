//! Discrete derivative (slope) estimators over paired coordinates.
//!
//! All estimators take abscissa `x` and ordinate `y` of equal length and
//! assume `x` is strictly increasing. Spacing may be non-uniform. Nothing is
//! validated beyond the length check: a repeated abscissa yields infinite or
//! NaN slopes, exactly as IEEE arithmetic produces them.
//!
//! - [`gradient_derivative`]: second-order central difference weighted by the
//!   squared neighbour spacings, one-sided at the ends.
//! - [`forward_difference_derivative`]: plain forward difference, one value
//!   shorter than the input.
//! - [`boundary_aware_central_difference`]: summed rise over summed run in the
//!   interior, one-sided at the ends.
//!
//! The two central schemes agree only when the spacing around a point is
//! symmetric. Under non-uniform spacing the summed form is a coarser, first
//! order estimate and the results differ.
//!
//! # Example
//!
//! ```
//! use curvecalc::derivative::{
//!     boundary_aware_central_difference, forward_difference_derivative, gradient_derivative,
//! };
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! assert_eq!(gradient_derivative(&x, &y), vec![1.0, 2.0, 4.0, 6.0, 7.0]);
//! assert_eq!(forward_difference_derivative(&x, &y), vec![1.0, 3.0, 5.0, 7.0]);
//! assert_eq!(boundary_aware_central_difference(&x, &y), vec![1.0, 2.0, 4.0, 6.0, 7.0]);
//! ```

mod central;
mod forward;
mod gradient;

pub use central::boundary_aware_central_difference;
pub use forward::forward_difference_derivative;
pub use gradient::gradient_derivative;

/// Panics unless both coordinate slices have the same length.
#[inline]
fn assert_paired(x: &[f64], y: &[f64]) {
    assert_eq!(
        x.len(),
        y.len(),
        "abscissa and ordinate must have the same length"
    );
}

/// Slope of the chord between samples `i` and `i + 1`.
#[inline]
fn chord_slope(x: &[f64], y: &[f64], i: usize) -> f64 {
    (y[i + 1] - y[i]) / (x[i + 1] - x[i])
}

/// Builds a length-n estimate from one-sided ends and an interior rule.
///
/// Fewer than two samples cannot carry a slope; those positions are NaN.
fn with_one_sided_ends<F>(x: &[f64], y: &[f64], interior: F) -> Vec<f64>
where
    F: Fn(usize) -> f64,
{
    assert_paired(x, y);
    let n = x.len();
    if n < 2 {
        return vec![f64::NAN; n];
    }

    let mut result = Vec::with_capacity(n);
    result.push(chord_slope(x, y, 0));
    result.extend((1..n - 1).map(interior));
    result.push(chord_slope(x, y, n - 2));
    result
}
