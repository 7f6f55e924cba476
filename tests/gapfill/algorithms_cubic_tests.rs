//! Tests for piecewise local cubic (4-point Lagrange) interpolation.
//!
//! These tests verify:
//! - Exact reproduction of cubic polynomials
//! - Reproduction of sample points inside the domain
//! - The half-open domain `[x_1, x_{n-2})`
//! - The 4-sample minimum
//!
//! ## Test Organization
//!
//! 1. **Exactness** - Cubic polynomials and sample points
//! 2. **Domain** - Inclusive left bound, exclusive right bound
//! 3. **Locality** - Each bracket uses its own stencil
//! 4. **Validation** - Minimum table size

use approx::assert_relative_eq;

use gapfill::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn cubic() -> InterpolationModel {
    Interpolator::new().method(CubicLagrange).build().unwrap()
}

fn poly(x: f64) -> f64 {
    2.0 * x * x * x - x * x + 3.0 * x - 5.0
}

// ============================================================================
// Exactness Tests
// ============================================================================

/// Test the x^3 scenario on the minimal 4-point table.
#[test]
fn test_cubic_on_cube_table() {
    let xp: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
    let yp: Vec<f64> = vec![0.0, 1.0, 8.0, 27.0];

    let y = cubic().interpolate_at(1.5, &xp, &yp).unwrap();
    assert_relative_eq!(y.unwrap(), 3.375, epsilon = 1e-12);
}

/// Test that a cubic polynomial is reproduced anywhere in the domain.
#[test]
fn test_cubic_reproduces_polynomial() {
    let xp = vec![-3.0, -2.2, -1.0, 0.0, 0.4, 1.7, 2.0, 3.5, 5.0];
    let yp: Vec<f64> = xp.iter().map(|&x| poly(x)).collect();
    let fitted = cubic().fit(&xp, &yp).unwrap();

    let domain = fitted.domain();
    let steps = 200;
    for k in 0..steps {
        let x = domain.lower + (domain.upper - domain.lower) * k as f64 / steps as f64;
        assert_relative_eq!(fitted.at(x).unwrap(), poly(x), epsilon = 1e-9);
    }
}

/// Test that sample points inside the domain are reproduced.
#[test]
fn test_cubic_reproduces_samples() {
    let xp = vec![0.0, 0.5, 1.5, 2.0, 3.0, 4.5, 6.0];
    let yp = vec![1.0, -2.0, 0.5, 3.0, 3.0, -1.0, 8.0];
    let fitted = cubic().fit(&xp, &yp).unwrap();

    // x_1 ..= x_{n-3} are inside [x_1, x_{n-2}).
    for i in 1..xp.len() - 2 {
        assert_relative_eq!(fitted.at(xp[i]).unwrap(), yp[i], epsilon = 1e-12);
    }
}

// ============================================================================
// Domain Tests
// ============================================================================

/// Test that the left bound is inclusive and the right bound exclusive.
#[test]
fn test_cubic_half_open_domain() {
    let xp = vec![0.0, 1.0, 2.0, 3.0];
    let yp = vec![0.0, 1.0, 8.0, 27.0];
    let fitted = cubic().fit(&xp, &yp).unwrap();

    assert_eq!(fitted.domain(), Domain::half_open(1.0, 2.0));
    assert_relative_eq!(fitted.at(1.0).unwrap(), 1.0, epsilon = 1e-12);
    assert_eq!(fitted.at(2.0), None);
    assert_eq!(fitted.at(1.0 - 1e-12), None);
}

/// Test that the first and last samples are never interpolation targets.
#[test]
fn test_cubic_outer_samples_missing() {
    let xp = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let yp = vec![0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
    let fitted = cubic().fit(&xp, &yp).unwrap();

    let out = fitted.evaluate(&xp).unwrap();
    assert_eq!(out[0], None);
    assert!(out[1].is_some());
    assert!(out[3].is_some());
    assert_eq!(out[4], None);
    assert_eq!(out[5], None);
    assert_eq!(fitted.at(-1.0), None);
    assert_eq!(fitted.at(f64::NAN), None);
}

// ============================================================================
// Locality Tests
// ============================================================================

/// Test that a far-away sample does not affect a bracket's cubic.
#[test]
fn test_cubic_is_local() {
    let xp = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut yp: Vec<f64> = xp.iter().map(|&x| x * x).collect();
    let model = cubic();

    let before = model.fit(&xp, &yp).unwrap().at(1.5).unwrap();
    // Bracket [1, 2] uses samples 0..=3; sample 6 is outside its stencil.
    yp[6] = 1000.0;
    let after = model.fit(&xp, &yp).unwrap().at(1.5).unwrap();

    assert_relative_eq!(before, after, epsilon = 1e-12);
    assert_relative_eq!(before, 2.25, epsilon = 1e-12);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that the cubic stencil needs four samples.
#[test]
fn test_cubic_too_few_points() {
    let xp = vec![0.0, 1.0, 2.0];
    let yp = vec![0.0, 1.0, 4.0];
    let res = cubic().fit(&xp, &yp);

    assert!(matches!(
        res,
        Err(GapfillError::TooFewPoints { got: 3, min: 4 })
    ));
}
