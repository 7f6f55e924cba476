//! Tests for piecewise linear interpolation.
//!
//! These tests verify:
//! - Sample points are reproduced
//! - Midpoints of evenly spaced samples average their neighbors
//! - The closed domain `[x_0, x_{n-1}]` and its missing-value sentinel
//!
//! ## Test Organization
//!
//! 1. **Exactness** - Sample points, midpoints, straight lines
//! 2. **Domain** - Endpoints and out-of-domain queries
//! 3. **Validation** - Linear-specific minimum size

use approx::assert_relative_eq;

use gapfill::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn linear() -> InterpolationModel {
    Interpolator::new().method(Linear).build().unwrap()
}

// ============================================================================
// Exactness Tests
// ============================================================================

/// Test that every sample point is reproduced.
#[test]
fn test_linear_reproduces_samples() {
    let xp = vec![-2.0, -0.5, 0.0, 1.25, 4.0];
    let yp = vec![3.0, -1.0, 0.5, 7.0, 2.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    for (&x, &y) in xp.iter().zip(yp.iter()) {
        assert_relative_eq!(fitted.at(x).unwrap(), y, epsilon = 1e-12);
    }
}

/// Test that midpoints of evenly spaced samples average their neighbors.
#[test]
fn test_linear_midpoints() {
    let xp: Vec<f64> = (0..6).map(|i| i as f64 * 0.5).collect();
    let yp = vec![1.0, 4.0, -2.0, 0.0, 10.0, 3.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    for i in 0..xp.len() - 1 {
        let mid = (xp[i] + xp[i + 1]) / 2.0;
        assert_relative_eq!(
            fitted.at(mid).unwrap(),
            (yp[i] + yp[i + 1]) / 2.0,
            epsilon = 1e-12
        );
    }
}

/// Test the cubic table scenario: linear gives the chord value.
#[test]
fn test_linear_on_cubic_table() {
    let xp: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
    let yp: Vec<f64> = vec![0.0, 1.0, 8.0, 27.0];

    let y = linear().interpolate_at(1.5, &xp, &yp).unwrap();
    assert_relative_eq!(y.unwrap(), 4.5, epsilon = 1e-12);
}

/// Test that straight lines are reproduced everywhere in the domain.
#[test]
fn test_linear_reproduces_lines() {
    let xp = vec![0.0f32, 0.3, 1.1, 2.0, 5.0];
    let yp: Vec<f32> = xp.iter().map(|x| 2.0 * x - 1.0).collect();
    let fitted = linear().fit(&xp, &yp).unwrap();

    for &x in &[0.0f32, 0.1, 0.7, 1.9, 3.3, 5.0] {
        assert_relative_eq!(fitted.at(x).unwrap(), 2.0 * x - 1.0, epsilon = 1e-5);
    }
}

// ============================================================================
// Domain Tests
// ============================================================================

/// Test that the closed domain includes both endpoints.
#[test]
fn test_linear_endpoints() {
    let xp = vec![0.0, 1.0, 2.0, 3.0];
    let yp = vec![0.0, 1.0, 8.0, 27.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    assert_eq!(fitted.at(0.0), Some(0.0));
    // Right endpoint resolves to the last interval.
    assert_relative_eq!(fitted.at(3.0).unwrap(), 27.0, epsilon = 1e-12);

    let domain = fitted.domain();
    assert_eq!(domain, Domain::closed(0.0, 3.0));
}

/// Test that queries outside the table are missing.
#[test]
fn test_linear_outside_domain() {
    let xp = vec![0.0, 1.0, 2.0];
    let yp = vec![5.0, 6.0, 7.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    assert_eq!(fitted.at(-1e-9), None);
    assert_eq!(fitted.at(2.0 + 1e-9), None);
    assert_eq!(fitted.at(f64::NEG_INFINITY), None);
    assert_eq!(fitted.at(f64::INFINITY), None);
    assert_eq!(fitted.at(f64::NAN), None);
}

/// Test a mixed batch where valid and invalid queries coexist.
#[test]
fn test_linear_mixed_batch() {
    let xp = vec![0.0, 1.0, 2.0];
    let yp = vec![0.0, 10.0, 20.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    let out = fitted.evaluate(&vec![-0.5, 0.25, 2.0, 2.5]).unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], None);
    assert_relative_eq!(out[1].unwrap(), 2.5, epsilon = 1e-12);
    assert_relative_eq!(out[2].unwrap(), 20.0, epsilon = 1e-12);
    assert_eq!(out[3], None);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that linear interpolation needs two samples.
#[test]
fn test_linear_too_few_points() {
    let xp = vec![1.0];
    let yp = vec![2.0];
    let res = linear().fit(&xp, &yp);
    assert!(matches!(
        res,
        Err(GapfillError::TooFewPoints { got: 1, min: 2 })
    ));
}

/// Test that the smallest valid table works.
#[test]
fn test_linear_two_points() {
    let xp = [1.0, 3.0];
    let yp = [10.0, 30.0];
    let fitted = linear().fit(&xp, &yp).unwrap();

    assert_relative_eq!(fitted.at(2.0).unwrap(), 20.0, epsilon = 1e-12);
    assert_relative_eq!(fitted.at(3.0).unwrap(), 30.0, epsilon = 1e-12);
}
