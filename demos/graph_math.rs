//! Graph math example: smoothing and slope estimation.
//!
//! Run with: cargo run --example graph_math
//! Set RUST_LOG=curvecalc=debug to see which modifiers ran.

use curvecalc::core::format_values;
use curvecalc::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_arr(name: &str, values: &[f64]) {
    println!("{}=[{}]", name, format_values(values));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Moving Averages ===\n");

    let samples = vec![10.0, 15.0, 10.0, 30.0, 20.0, 45.0, 70.0, 50.0, 40.0, 60.0];
    print_arr("inp", &samples);
    print_arr("simple", &simple_moving_average(&samples));
    print_arr("cumulative", &cumulative_moving_average(&samples));
    print_arr("exponential", &exponential_moving_average(&samples));

    println!("\n=== Derivatives ===\n");

    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
    print_arr("x", &x);
    print_arr("y", &y);
    print_arr("gradient", &gradient_derivative(&x, &y));
    print_arr("forward", &forward_difference_derivative(&x, &y));
    print_arr("central", &boundary_aware_central_difference(&x, &y));

    println!("\n=== Modifiers ===\n");

    let curve = Curve::from_values(samples)?;
    let modifiers = [
        Modifier::from(SimpleMovingAverage::builder().step(5.5).build()?),
        Modifier::MavgCumulative,
        Modifier::from(ExponentialMovingAverage::builder().alpha(0.25).build()?),
        Modifier::from(Derivative::new(DerivativeMode::ForwardDifference)),
    ];

    for modifier in &modifiers {
        println!("{}", modifier.to_json()?);
        println!("{}\n", modifier.apply(&curve)?);
    }

    Ok(())
}
