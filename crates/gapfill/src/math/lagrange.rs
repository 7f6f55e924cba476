//! Lagrange basis polynomials on small stencils.
//!
//! ## Purpose
//!
//! This module evaluates the Lagrange basis weights for a set of nodes and
//! combines them with node values to evaluate the unique polynomial through
//! the stencil.
//!
//! ## Key concepts
//!
//! * **Basis value**: `L_k(x) = Π_{j≠k} (x - x_j) / (x_k - x_j)`.
//! * **Polynomial value**: `P(x) = Σ_k y_k · L_k(x)`.
//!
//! ## Invariants
//!
//! * Nodes must be pairwise distinct (guaranteed upstream by strictly increasing x).
//! * `L_k(x_j)` is 1 when `j == k` and 0 otherwise.
//!
//! ## Non-goals
//!
//! * This module does not select the stencil from a sample table.
//! * This module does not use barycentric or Newton forms.

// External dependencies
use num_traits::Float;

// ============================================================================
// Basis Evaluation
// ============================================================================

/// Evaluate the `k`-th Lagrange basis polynomial of `nodes` at `x`.
#[inline]
pub fn basis<T: Float>(nodes: &[T], k: usize, x: T) -> T {
    let xk = nodes[k];
    nodes
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != k)
        .fold(T::one(), |acc, (_, &xj)| acc * (x - xj) / (xk - xj))
}

/// Evaluate the interpolating polynomial through `(nodes, values)` at `x`.
///
/// `nodes` and `values` must have the same length.
#[inline]
pub fn evaluate<T: Float>(nodes: &[T], values: &[T], x: T) -> T {
    debug_assert_eq!(nodes.len(), values.len());
    values
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (k, &yk)| acc + yk * basis(nodes, k, x))
}
