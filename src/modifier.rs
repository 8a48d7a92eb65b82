//! Parameterised curve modifiers.
//!
//! A [`Modifier`] wraps one smoothing or derivative operation together with
//! its parameters and applies it to a [`Curve`], re-aligning the abscissa to
//! the produced ordinates. Unlike the free functions it validates its input
//! and parameters and reports problems as [`CurveError`].
//!
//! Modifiers serialise to tagged JSON so a set of transformations can be
//! stored and reloaded:
//!
//! ```
//! use curvecalc::core::Curve;
//! use curvecalc::modifier::Modifier;
//!
//! let modifier = Modifier::from_json(r#"{"type":"MavgExponential","alpha":0.5}"#).unwrap();
//! let curve = Curve::from_values(vec![10.0, 15.0, 10.0]).unwrap();
//!
//! let smoothed = modifier.apply(&curve).unwrap();
//! assert_eq!(smoothed.ys(), &[10.0, 12.5, 11.25]);
//! ```

use crate::core::Curve;
use crate::derivative::{
    boundary_aware_central_difference, forward_difference_derivative, gradient_derivative,
};
use crate::error::{CurveError, Result};
use crate::smoothing::{
    cumulative_moving_average, exponential_moving_average_with, simple_moving_average_with,
    step_window_size, DEFAULT_ALPHA, DEFAULT_WINDOW_SIZE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Width of a simple moving average window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Interval {
    /// Fixed number of samples.
    Points(usize),
    /// Abscissa span, converted with [`step_window_size`].
    Step(f64),
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Points(DEFAULT_WINDOW_SIZE)
    }
}

/// Simple moving average parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleMovingAverage {
    #[serde(default)]
    pub window: Interval,
}

/// Builder for [`SimpleMovingAverage`].
#[derive(Debug, Clone, Default)]
pub struct SmaBuilder {
    window: Interval,
}

impl SmaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a window of `points` samples.
    pub fn points(mut self, points: usize) -> Self {
        self.window = Interval::Points(points);
        self
    }

    /// Use a window spanning `step` along the abscissa.
    pub fn step(mut self, step: f64) -> Self {
        self.window = Interval::Step(step);
        self
    }

    pub fn build(self) -> Result<SimpleMovingAverage> {
        let sma = SimpleMovingAverage {
            window: self.window,
        };
        sma.validate()?;
        Ok(sma)
    }
}

impl SimpleMovingAverage {
    pub fn new(points: usize) -> Self {
        Self {
            window: Interval::Points(points),
        }
    }

    pub fn builder() -> SmaBuilder {
        SmaBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        match self.window {
            Interval::Points(0) => Err(CurveError::InvalidParameter(
                "window must contain at least one point".to_string(),
            )),
            Interval::Step(step) if !(step.is_finite() && step > 0.0) => Err(
                CurveError::InvalidParameter(format!("step must be positive, got {step}")),
            ),
            _ => Ok(()),
        }
    }

    /// Smooth the ordinates; each value sits at the abscissa of its window's
    /// last sample.
    pub fn calc(&self, curve: &Curve) -> Result<Curve> {
        self.validate()?;

        let window = match self.window {
            Interval::Points(points) => points,
            Interval::Step(step) => {
                let points = step_window_size(curve.xs(), step);
                if points == 0 {
                    return Err(CurveError::InvalidParameter(format!(
                        "step {step} covers no samples"
                    )));
                }
                points
            }
        };

        if curve.len() < window {
            return Err(CurveError::InsufficientData {
                needed: window,
                got: curve.len(),
            });
        }

        let ys = simple_moving_average_with(curve.ys(), window);
        Curve::new(curve.xs()[window - 1..].to_vec(), ys)
    }
}

/// Exponential moving average parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialMovingAverage {
    pub alpha: f64,
}

impl Default for ExponentialMovingAverage {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Builder for [`ExponentialMovingAverage`].
#[derive(Debug, Clone)]
pub struct EmaBuilder {
    alpha: f64,
}

impl Default for EmaBuilder {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl EmaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smoothing factor (0 < alpha <= 1).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn build(self) -> Result<ExponentialMovingAverage> {
        let ema = ExponentialMovingAverage { alpha: self.alpha };
        ema.validate()?;
        Ok(ema)
    }
}

impl ExponentialMovingAverage {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    pub fn builder() -> EmaBuilder {
        EmaBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.alpha > 0.0 && self.alpha <= 1.0 {
            Ok(())
        } else {
            Err(CurveError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )))
        }
    }

    pub fn calc(&self, curve: &Curve) -> Result<Curve> {
        self.validate()?;
        let ys = exponential_moving_average_with(curve.ys(), self.alpha);
        Curve::new(curve.xs().to_vec(), ys)
    }
}

/// Derivative estimation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivativeMode {
    /// Spacing-weighted central difference, see [`gradient_derivative`].
    #[default]
    Gradient,
    /// One-sided forward difference, see [`forward_difference_derivative`].
    ForwardDifference,
    /// Summed central difference, see [`boundary_aware_central_difference`].
    CentralDifference,
}

/// Derivative parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Derivative {
    #[serde(default)]
    pub mode: DerivativeMode,
}

impl Derivative {
    pub fn new(mode: DerivativeMode) -> Self {
        Self { mode }
    }

    /// Estimate the slope of the curve.
    ///
    /// Forward differences sit at the left sample of each pair; the other
    /// schemes keep the abscissa unchanged. A non-increasing abscissa is
    /// logged but not rejected.
    pub fn calc(&self, curve: &Curve) -> Result<Curve> {
        if curve.len() < 2 {
            return Err(CurveError::InsufficientData {
                needed: 2,
                got: curve.len(),
            });
        }
        if !curve.is_strictly_increasing() {
            warn!(
                mode = ?self.mode,
                "abscissa is not strictly increasing; slopes may be infinite or NaN"
            );
        }

        let (xs, ys) = (curve.xs(), curve.ys());
        match self.mode {
            DerivativeMode::Gradient => Curve::new(xs.to_vec(), gradient_derivative(xs, ys)),
            DerivativeMode::ForwardDifference => Curve::new(
                xs[..xs.len() - 1].to_vec(),
                forward_difference_derivative(xs, ys),
            ),
            DerivativeMode::CentralDifference => {
                Curve::new(xs.to_vec(), boundary_aware_central_difference(xs, ys))
            }
        }
    }
}

/// A curve transformation with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Modifier {
    MavgSimple(SimpleMovingAverage),
    MavgCumulative,
    MavgExponential(ExponentialMovingAverage),
    Derivative(Derivative),
}

impl Modifier {
    /// Type tag used in the serialised form.
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::MavgSimple(_) => "MavgSimple",
            Modifier::MavgCumulative => "MavgCumulative",
            Modifier::MavgExponential(_) => "MavgExponential",
            Modifier::Derivative(_) => "Derivative",
        }
    }

    /// Apply the modifier, producing a new curve.
    pub fn apply(&self, curve: &Curve) -> Result<Curve> {
        let result = match self {
            Modifier::MavgSimple(sma) => sma.calc(curve)?,
            Modifier::MavgCumulative => {
                Curve::new(curve.xs().to_vec(), cumulative_moving_average(curve.ys()))?
            }
            Modifier::MavgExponential(ema) => ema.calc(curve)?,
            Modifier::Derivative(derivative) => derivative.calc(curve)?,
        };

        debug!(
            modifier = self.name(),
            input_len = curve.len(),
            output_len = result.len(),
            "applied modifier"
        );
        Ok(result)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<SimpleMovingAverage> for Modifier {
    fn from(sma: SimpleMovingAverage) -> Self {
        Modifier::MavgSimple(sma)
    }
}

impl From<ExponentialMovingAverage> for Modifier {
    fn from(ema: ExponentialMovingAverage) -> Self {
        Modifier::MavgExponential(ema)
    }
}

impl From<Derivative> for Modifier {
    fn from(derivative: Derivative) -> Self {
        Modifier::Derivative(derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> Curve {
        Curve::from_values(vec![
            10.0, 15.0, 10.0, 30.0, 20.0, 45.0, 70.0, 50.0, 40.0, 60.0,
        ])
        .unwrap()
    }

    fn parabola() -> Curve {
        Curve::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 1.0, 4.0, 9.0, 16.0],
        )
        .unwrap()
    }

    // ==================== builders ====================

    #[test]
    fn builders_validate_parameters() {
        assert!(SimpleMovingAverage::builder().points(0).build().is_err());
        assert!(SimpleMovingAverage::builder().step(0.0).build().is_err());
        assert!(SimpleMovingAverage::builder().step(f64::NAN).build().is_err());
        assert!(SimpleMovingAverage::builder().step(2.5).build().is_ok());

        assert!(ExponentialMovingAverage::builder().alpha(0.0).build().is_err());
        assert!(ExponentialMovingAverage::builder().alpha(1.5).build().is_err());
        assert!(ExponentialMovingAverage::builder().alpha(f64::NAN).build().is_err());
        assert!(ExponentialMovingAverage::builder().alpha(1.0).build().is_ok());
    }

    #[test]
    fn defaults_match_fixed_parameters() {
        assert_eq!(
            SimpleMovingAverage::default().window,
            Interval::Points(DEFAULT_WINDOW_SIZE)
        );
        assert_eq!(ExponentialMovingAverage::default().alpha, DEFAULT_ALPHA);
        assert_eq!(Derivative::default().mode, DerivativeMode::Gradient);
    }

    // ==================== smoothing ====================

    #[test]
    fn simple_moving_average_aligns_to_window_end() {
        let modifier = Modifier::from(SimpleMovingAverage::new(5));
        let result = modifier.apply(&sample_curve()).unwrap();

        assert_eq!(result.xs(), &[5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_relative_eq!(result.ys()[0], 17.0, epsilon = 1e-10);
        assert_relative_eq!(result.ys()[5], 53.0, epsilon = 1e-10);
    }

    #[test]
    fn simple_moving_average_by_step_on_curve() {
        let sma = SimpleMovingAverage::builder().step(6.5).build().unwrap();
        let result = sma.calc(&sample_curve()).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.xs()[0], 6.0);
        assert_relative_eq!(result.ys()[2], 37.5, epsilon = 1e-10);
    }

    #[test]
    fn simple_moving_average_reports_short_input() {
        let curve = Curve::from_values(vec![1.0, 2.0, 3.0]).unwrap();

        assert_eq!(
            SimpleMovingAverage::default().calc(&curve),
            Err(CurveError::InsufficientData { needed: 6, got: 3 })
        );

        let tiny_step = SimpleMovingAverage::builder().step(0.5).build().unwrap();
        assert!(matches!(
            tiny_step.calc(&curve),
            Err(CurveError::InvalidParameter(_))
        ));
    }

    #[test]
    fn cumulative_and_exponential_keep_abscissa() {
        let curve = sample_curve();

        let cumul = Modifier::MavgCumulative.apply(&curve).unwrap();
        assert_eq!(cumul.xs(), curve.xs());
        assert_relative_eq!(cumul.ys()[9], 35.0, epsilon = 1e-10);

        let exp = Modifier::from(ExponentialMovingAverage::default())
            .apply(&curve)
            .unwrap();
        assert_eq!(exp.xs(), curve.xs());
        assert_relative_eq!(exp.ys()[9], 52.666015625, epsilon = 1e-10);
    }

    #[test]
    fn deserialised_parameters_are_validated() {
        let modifier = Modifier::from_json(r#"{"type":"MavgExponential","alpha":2.0}"#).unwrap();
        assert!(matches!(
            modifier.apply(&sample_curve()),
            Err(CurveError::InvalidParameter(_))
        ));
    }

    // ==================== derivative ====================

    #[test]
    fn derivative_modes_on_parabola() {
        let curve = parabola();

        let gradient = Derivative::new(DerivativeMode::Gradient).calc(&curve).unwrap();
        assert_eq!(gradient.xs(), curve.xs());
        assert_eq!(gradient.ys(), &[1.0, 2.0, 4.0, 6.0, 7.0]);

        let forward = Derivative::new(DerivativeMode::ForwardDifference)
            .calc(&curve)
            .unwrap();
        assert_eq!(forward.xs(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(forward.ys(), &[1.0, 3.0, 5.0, 7.0]);

        let central = Derivative::new(DerivativeMode::CentralDifference)
            .calc(&curve)
            .unwrap();
        assert_eq!(central.ys(), &[1.0, 2.0, 4.0, 6.0, 7.0]);
    }

    #[test]
    fn derivative_requires_two_points() {
        let curve = Curve::from_values(vec![1.0]).unwrap();
        assert_eq!(
            Derivative::default().calc(&curve),
            Err(CurveError::InsufficientData { needed: 2, got: 1 })
        );
    }

    #[test]
    fn derivative_keeps_degenerate_slopes() {
        let curve = Curve::new(vec![0.0, 0.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap();
        let result = Derivative::default().calc(&curve).unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.ys()[0].is_infinite());
    }

    // ==================== serialization ====================

    #[test]
    fn modifiers_serialize_with_type_tag() {
        let json = Modifier::MavgCumulative.to_json().unwrap();
        assert_eq!(json, r#"{"type":"MavgCumulative"}"#);

        let json = Modifier::from(Derivative::new(DerivativeMode::ForwardDifference))
            .to_json()
            .unwrap();
        assert_eq!(json, r#"{"type":"Derivative","mode":"forward_difference"}"#);

        let json = Modifier::from(SimpleMovingAverage::new(4)).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"type":"MavgSimple","window":{"mode":"points","value":4}}"#
        );
    }

    #[test]
    fn modifiers_load_from_json() {
        let modifier =
            Modifier::from_json(r#"{"type":"MavgSimple","window":{"mode":"step","value":5.5}}"#)
                .unwrap();
        assert_eq!(
            modifier,
            Modifier::MavgSimple(SimpleMovingAverage {
                window: Interval::Step(5.5)
            })
        );
        assert_eq!(modifier.name(), "MavgSimple");

        let modifier = Modifier::from_json(r#"{"type":"Derivative"}"#).unwrap();
        assert_eq!(modifier, Modifier::Derivative(Derivative::default()));

        assert!(matches!(
            Modifier::from_json(r#"{"type":"Despike"}"#),
            Err(CurveError::Serialization(_))
        ));
    }
}
