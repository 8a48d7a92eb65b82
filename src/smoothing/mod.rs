//! Moving-average smoothers.
//!
//! Three variants over a sample sequence:
//! - simple (boxcar) average in valid mode, dropping partial windows
//! - cumulative (running) average from the start of the sequence
//! - exponential moving average, a first-order IIR recurrence
//!
//! # Example
//!
//! ```
//! use curvecalc::smoothing::{
//!     cumulative_moving_average, exponential_moving_average, simple_moving_average,
//! };
//!
//! let samples = vec![10.0, 15.0, 10.0, 30.0, 20.0, 45.0, 70.0, 50.0, 40.0, 60.0];
//!
//! // Window of 6, valid mode: 10 - 6 + 1 outputs
//! assert_eq!(simple_moving_average(&samples).len(), 5);
//!
//! // One output per sample
//! assert_eq!(cumulative_moving_average(&samples)[1], 12.5);
//! assert_eq!(exponential_moving_average(&samples)[1], 12.5);
//! ```

mod moving_average;

pub use moving_average::{
    cumulative_moving_average, exponential_moving_average, exponential_moving_average_with,
    simple_moving_average, simple_moving_average_by_step, simple_moving_average_with,
    step_window_size, DEFAULT_ALPHA, DEFAULT_WINDOW_SIZE,
};
