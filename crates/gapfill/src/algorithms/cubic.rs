//! Piecewise local cubic interpolation with 4-point Lagrange stencils.
//!
//! ## Purpose
//!
//! Evaluates a local cubic through the four samples surrounding a query's
//! bracket interval. This is not a global polynomial fit: each bracket has
//! its own cubic.
//!
//! ## Key concepts
//!
//! * **Stencil**: For bracket `i`, the samples `i-1, i, i+1, i+2`.
//! * **Domain**: The half-open interval `[x_1, x_{n-2})`. The first and last
//!   samples only ever serve as outer stencil points, and the right boundary
//!   is exclusive.
//!
//! ## Invariants
//!
//! * The sample table has been validated (at least 4 samples, strictly increasing x).
//! * Data sampled from a cubic polynomial is reproduced exactly (up to rounding).
//!
//! ## Non-goals
//!
//! * No splines, no global Lagrange polynomial, no extrapolation.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bracket::find_bracket;
use crate::math::lagrange;
use crate::primitives::domain::Domain;

/// Minimum number of samples for the 4-point stencil.
pub const MIN_POINTS: usize = 4;

/// Supported query domain `[x_1, x_{n-2})`.
pub fn domain<T: Float>(xp: &[T]) -> Domain<T> {
    Domain::half_open(xp[1], xp[xp.len() - 2])
}

/// Interpolate with the local cubic at `x`, or `None` outside the domain.
pub fn interpolate<T: Float>(xp: &[T], yp: &[T], x: T) -> Option<T> {
    if !domain(xp).contains(x) {
        return None;
    }

    let i = find_bracket(xp, x);
    let stencil = (i - 1)..(i + 3);
    Some(lagrange::evaluate(&xp[stencil.clone()], &yp[stencil], x))
}
