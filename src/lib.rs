//! # curvecalc
//!
//! Moving-average smoothers and discrete derivative estimators for sampled
//! curves.
//!
//! The numeric core is a set of pure functions over `&[f64]`:
//! [`smoothing`] provides simple, cumulative and exponential moving averages,
//! [`derivative`] provides gradient, forward-difference and central-difference
//! slope estimates. Those functions never fail: degenerate input gives
//! degenerate output (empty vectors, NaN or infinite values).
//!
//! On top of that, [`core::Curve`] and [`modifier::Modifier`] form a checked
//! layer that validates input and parameters, re-aligns the abscissa and can
//! be stored as JSON.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod derivative;
pub mod error;
pub mod modifier;
pub mod smoothing;

pub use derivative::{
    boundary_aware_central_difference, forward_difference_derivative, gradient_derivative,
};
pub use error::{CurveError, Result};
pub use smoothing::{
    cumulative_moving_average, exponential_moving_average, simple_moving_average,
};

pub mod prelude {
    pub use crate::core::{Curve, CurveBuilder};
    pub use crate::derivative::{
        boundary_aware_central_difference, forward_difference_derivative, gradient_derivative,
    };
    pub use crate::error::{CurveError, Result};
    pub use crate::modifier::{
        Derivative, DerivativeMode, ExponentialMovingAverage, Interval, Modifier,
        SimpleMovingAverage,
    };
    pub use crate::smoothing::{
        cumulative_moving_average, exponential_moving_average, simple_moving_average,
        DEFAULT_ALPHA, DEFAULT_WINDOW_SIZE,
    };
}
