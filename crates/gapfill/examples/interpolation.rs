//! 1-D Interpolation Examples
//!
//! This example demonstrates both interpolation methods:
//! - Piecewise linear interpolation on the closed domain
//! - Local cubic Lagrange interpolation on the half-open domain
//! - Mixed batches where some queries fall outside the domain
//!
//! Run with `RUST_LOG=debug` to see the library's log output.

use gapfill::prelude::*;

fn main() -> Result<(), GapfillError> {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("gapfill - 1-D Interpolation Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_cube_table()?;
    example_2_mixed_batch()?;

    Ok(())
}

/// Example 1: Linear vs. cubic on samples of x^3
fn example_1_cube_table() -> Result<(), GapfillError> {
    println!("Example 1: Samples of x^3");
    println!("{}", "-".repeat(60));

    let xp: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
    let yp: Vec<f64> = vec![0.0, 1.0, 8.0, 27.0];

    let linear = Interpolator::new().method(Linear).build()?;
    let cubic = Interpolator::new().method(CubicLagrange).build()?;

    // Expected: linear 4.5, cubic 3.375 (exact)
    println!("  linear(1.5) = {:?}", linear.interpolate_at(1.5, &xp, &yp)?);
    println!("  cubic(1.5)  = {:?}", cubic.interpolate_at(1.5, &xp, &yp)?);
    println!();
    Ok(())
}

/// Example 2: A batch that straddles the domain boundaries
fn example_2_mixed_batch() -> Result<(), GapfillError> {
    println!("Example 2: Mixed batch");
    println!("{}", "-".repeat(60));

    let xp: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let yp: Vec<f64> = xp.iter().map(|x| (x / 2.0).sin()).collect();
    let xq = vec![-0.5, 0.0, 0.5, 3.25, 5.9, 6.0, 7.0, 7.5];

    for method in [Linear, CubicLagrange] {
        let fitted = Interpolator::new().method(method).build()?.fit(&xp, &yp)?;
        let domain = fitted.domain();
        println!(
            "  {:<15} domain [{}, {}{}",
            method.name(),
            domain.lower,
            domain.upper,
            if domain.upper_inclusive { "]" } else { ")" }
        );

        let yq = fitted.evaluate(&xq)?;
        for (x, y) in xq.iter().zip(yq.iter()) {
            match y {
                Some(y) => println!("    x = {x:>5.2}  y = {y:>9.5}"),
                None => println!("    x = {x:>5.2}  y =   missing"),
            }
        }
    }
    println!();
    Ok(())
}
