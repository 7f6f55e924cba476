#![cfg(feature = "dev")]
//! Tests for Lagrange basis evaluation.
//!
//! ## Test Organization
//!
//! 1. **Basis Properties** - Kronecker delta at nodes, partition of unity
//! 2. **Polynomial Evaluation** - Exactness for cubics

use approx::assert_relative_eq;

use gapfill::internals::math::lagrange::{basis, evaluate};

// ============================================================================
// Basis Property Tests
// ============================================================================

/// Test that L_k(x_j) is 1 for j == k and 0 otherwise.
#[test]
fn test_basis_kronecker() {
    let nodes = [-1.0f64, 0.5, 2.0, 4.0];
    for k in 0..4 {
        for (j, &xj) in nodes.iter().enumerate() {
            let expected = if j == k { 1.0 } else { 0.0 };
            assert_relative_eq!(basis(&nodes, k, xj), expected, epsilon = 1e-12);
        }
    }
}

/// Test that the basis sums to one everywhere.
#[test]
fn test_basis_partition_of_unity() {
    let nodes = [0.0f64, 1.0, 3.0, 3.5];
    for &x in &[-2.0, 0.25, 1.7, 3.2, 10.0] {
        let sum: f64 = (0..4).map(|k| basis(&nodes, k, x)).sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

// ============================================================================
// Polynomial Evaluation Tests
// ============================================================================

/// Test that four nodes reproduce a cubic.
#[test]
fn test_evaluate_cubic() {
    let p = |x: f64| x * x * x - 2.0 * x + 1.0;
    let nodes = [0.0f64, 1.0, 2.0, 3.0];
    let values = nodes.map(p);

    for &x in &[0.5, 1.5, 2.25, 2.9] {
        assert_relative_eq!(evaluate(&nodes, &values, x), p(x), epsilon = 1e-12);
    }
    assert_relative_eq!(evaluate(&nodes, &[0.0, 1.0, 8.0, 27.0], 1.5), 3.375, epsilon = 1e-12);
}
