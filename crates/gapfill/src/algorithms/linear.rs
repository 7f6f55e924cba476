//! Piecewise linear interpolation.
//!
//! ## Purpose
//!
//! Evaluates the polyline through a sample table at a single query point.
//!
//! ## Key concepts
//!
//! * **Domain**: The closed interval `[x_0, x_{n-1}]`.
//! * **Formula**: `y = y_i + (y_{i+1} - y_i) / (x_{i+1} - x_i) · (x - x_i)`.
//!
//! ## Invariants
//!
//! * The sample table has been validated (at least 2 samples, strictly increasing x).
//! * Sample points are reproduced exactly.
//!
//! ## Non-goals
//!
//! * No extrapolation beyond the table.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bracket::find_bracket;
use crate::primitives::domain::Domain;

/// Minimum number of samples for linear interpolation.
pub const MIN_POINTS: usize = 2;

/// Supported query domain `[x_0, x_{n-1}]`.
pub fn domain<T: Float>(xp: &[T]) -> Domain<T> {
    Domain::closed(xp[0], xp[xp.len() - 1])
}

/// Interpolate linearly at `x`, or `None` outside the table.
pub fn interpolate<T: Float>(xp: &[T], yp: &[T], x: T) -> Option<T> {
    if !domain(xp).contains(x) {
        return None;
    }

    let i = find_bracket(xp, x);
    let slope = (yp[i + 1] - yp[i]) / (xp[i + 1] - xp[i]);
    Some(yp[i] + slope * (x - xp[i]))
}
