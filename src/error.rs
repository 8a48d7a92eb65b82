//! Error types for the curvecalc library.

use thiserror::Error;

/// Result type alias for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Errors raised by the checked [`Curve`](crate::core::Curve) and
/// [`Modifier`](crate::modifier::Modifier) surface.
///
/// The free functions in [`smoothing`](crate::smoothing) and
/// [`derivative`](crate::derivative) never return these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Abscissa and ordinate lengths disagree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Modifier description could not be read or written.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        CurveError::Serialization(err.to_string())
    }
}
