//! Simple, cumulative and exponential moving averages.

/// Window length used by [`simple_moving_average`].
pub const DEFAULT_WINDOW_SIZE: usize = 6;

/// Smoothing factor used by [`exponential_moving_average`].
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Simple moving average with a window of [`DEFAULT_WINDOW_SIZE`] samples.
///
/// See [`simple_moving_average_with`].
pub fn simple_moving_average(samples: &[f64]) -> Vec<f64> {
    simple_moving_average_with(samples, DEFAULT_WINDOW_SIZE)
}

/// Simple moving average in valid mode.
///
/// Each output is the equally weighted sum of `window_size` consecutive
/// samples, so the result has `n - window_size + 1` values. Windows that would
/// run past either end of the input are dropped, not padded. A window larger
/// than the input, or a zero window, gives an empty result.
///
/// # Arguments
/// * `samples` - Input sequence
/// * `window_size` - Number of samples per window
pub fn simple_moving_average_with(samples: &[f64], window_size: usize) -> Vec<f64> {
    if window_size == 0 || samples.len() < window_size {
        return Vec::new();
    }

    let weight = 1.0 / window_size as f64;
    samples
        .windows(window_size)
        .map(|window| window.iter().map(|&x| x * weight).sum())
        .collect()
}

/// Number of samples an abscissa `step` covers for [`simple_moving_average_by_step`].
///
/// Counts the samples after the first whose distance from `xs[0]` is strictly
/// less than `step`, stopping at the first one that is not. For uniform
/// spacing `h` this is `ceil(step / h) - 1`. Non-positive or NaN steps cover
/// nothing.
pub fn step_window_size(xs: &[f64], step: f64) -> usize {
    let Some((&first, rest)) = xs.split_first() else {
        return 0;
    };
    rest.iter().take_while(|&&x| x - first < step).count()
}

/// Simple moving average whose window is given as an abscissa span.
///
/// The span is converted to a sample count with [`step_window_size`] and the
/// ordinates are then smoothed with [`simple_moving_average_with`].
///
/// # Panics
///
/// Panics if `xs` and `ys` have different lengths.
pub fn simple_moving_average_by_step(xs: &[f64], ys: &[f64], step: f64) -> Vec<f64> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "abscissa and ordinate must have the same length"
    );
    simple_moving_average_with(ys, step_window_size(xs, step))
}

/// Cumulative moving average: the mean of all samples up to each index.
///
/// `result[i] = (samples[0] + ... + samples[i]) / (i + 1)`.
pub fn cumulative_moving_average(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .enumerate()
        .scan(0.0, |sum, (i, &x)| {
            *sum += x;
            Some(*sum / (i + 1) as f64)
        })
        .collect()
}

/// Exponential moving average with smoothing factor [`DEFAULT_ALPHA`].
pub fn exponential_moving_average(samples: &[f64]) -> Vec<f64> {
    exponential_moving_average_with(samples, DEFAULT_ALPHA)
}

/// Exponential moving average.
///
/// `result[0] = samples[0]`, then
/// `result[i] = alpha * samples[i] + (1 - alpha) * result[i - 1]`.
/// Evaluated strictly left to right. `alpha` is used as given.
///
/// # Arguments
/// * `samples` - Input sequence
/// * `alpha` - Weight of the newest sample
pub fn exponential_moving_average_with(samples: &[f64], alpha: f64) -> Vec<f64> {
    let Some((&first, rest)) = samples.split_first() else {
        return Vec::new();
    };

    std::iter::once(first)
        .chain(rest.iter().scan(first, |prev, &x| {
            *prev = alpha * x + (1.0 - alpha) * *prev;
            Some(*prev)
        }))
        .collect()
}
