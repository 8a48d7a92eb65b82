//! Curve data structure: paired abscissa and ordinate samples.

use crate::error::{CurveError, Result};
use std::fmt;

/// A sampled curve with abscissa `xs` and ordinate `ys` of equal length.
///
/// The abscissa is expected to be strictly increasing for derivative
/// estimates, but this is not enforced; see [`Curve::is_strictly_increasing`].
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// Builder for constructing a [`Curve`].
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    xs: Option<Vec<f64>>,
    ys: Vec<f64>,
}

impl CurveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xs(mut self, xs: Vec<f64>) -> Self {
        self.xs = Some(xs);
        self
    }

    pub fn ys(mut self, ys: Vec<f64>) -> Self {
        self.ys = ys;
        self
    }

    /// Build the curve. Without an explicit abscissa, `1..=n` is used.
    pub fn build(self) -> Result<Curve> {
        match self.xs {
            Some(xs) => Curve::new(xs, self.ys),
            None => Curve::from_values(self.ys),
        }
    }
}

impl Curve {
    /// Create a curve from paired coordinates.
    ///
    /// Fails on empty input or when the coordinate lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(CurveError::DimensionMismatch {
                expected: xs.len(),
                got: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(CurveError::EmptyData);
        }
        Ok(Self { xs, ys })
    }

    /// Create a curve over the index abscissa `1, 2, ..., n`.
    pub fn from_values(ys: Vec<f64>) -> Result<Self> {
        let xs = (1..=ys.len()).map(|i| i as f64).collect();
        Self::new(xs, ys)
    }

    pub fn builder() -> CurveBuilder {
        CurveBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.xs, self.ys)
    }

    /// True when every abscissa is greater than its predecessor.
    pub fn is_strictly_increasing(&self) -> bool {
        self.xs.windows(2).all(|w| w[1] > w[0])
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "xs=[{}]", format_values(&self.xs))?;
        write!(f, "ys=[{}]", format_values(&self.ys))
    }
}

/// Render values as comma separated text, e.g. `"1, 2.5, 3"`.
pub fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
