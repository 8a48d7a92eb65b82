//! Core data structures for sampled curves.

mod curve;

pub use curve::{format_values, Curve, CurveBuilder};
