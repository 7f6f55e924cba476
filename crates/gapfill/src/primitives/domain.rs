//! Supported query domains.
//!
//! ## Purpose
//!
//! Each interpolation method only defines values on part of the real line.
//! This module describes that interval so callers and algorithms agree on
//! which queries receive the missing-value sentinel.
//!
//! ## Key concepts
//!
//! * **Closed domain**: `[lower, upper]`, used by linear interpolation.
//! * **Half-open domain**: `[lower, upper)`, used by the local cubic stencil.
//!
//! ## Invariants
//!
//! * NaN is never contained in any domain.

// External dependencies
use num_traits::Float;

/// Interval of query values for which an interpolant is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<T> {
    /// Smallest supported query (always inclusive).
    pub lower: T,

    /// Upper bound of supported queries.
    pub upper: T,

    /// Whether `upper` itself is a supported query.
    pub upper_inclusive: bool,
}

impl<T: Float> Domain<T> {
    /// Closed interval `[lower, upper]`.
    pub fn closed(lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: true,
        }
    }

    /// Half-open interval `[lower, upper)`.
    pub fn half_open(lower: T, upper: T) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: false,
        }
    }

    /// Whether `x` is a supported query.
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        if self.upper_inclusive {
            x >= self.lower && x <= self.upper
        } else {
            x >= self.lower && x < self.upper
        }
    }
}
