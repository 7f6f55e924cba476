//! Bracket search over a sample table.
//!
//! ## Purpose
//!
//! Locates the interval `[x_i, x_{i+1}]` of a strictly increasing sample
//! table that contains a query value. Both interpolators share this search.
//!
//! ## Key concepts
//!
//! * **Exceedance scan**: Scan left to right for the first sample whose
//!   x-value strictly exceeds the query, then step back one.
//! * **Right-endpoint rule**: If no sample exceeds the query (the query equals
//!   the last x-value), the bracket is the final interval `[x_{n-2}, x_{n-1}]`,
//!   never a zero-width interval.
//!
//! ## Invariants
//!
//! * The table has at least two samples.
//! * The returned index `i` satisfies `i + 1 < n`.
//!
//! ## Non-goals
//!
//! * Queries left of `x_0` are not meaningful here; callers filter them by
//!   domain first. They resolve to the first interval.
//! * This is a linear scan; no binary search is attempted.

// External dependencies
use num_traits::Float;

/// Index `i` of the bracket interval `[xp[i], xp[i + 1]]` containing `x`.
#[inline]
pub fn find_bracket<T: Float>(xp: &[T], x: T) -> usize {
    let last_interval = xp.len() - 2;
    match xp.iter().position(|&xi| xi > x) {
        Some(exceeding) => exceeding.saturating_sub(1),
        // Nothing exceeds x: x sits on the right endpoint.
        None => last_interval,
    }
}
