//! Output types for pixel repair.
//!
//! ## Purpose
//!
//! This module defines the `RepairResult` struct returned by a repair run:
//! the repaired grid (when a copy was requested), the extent used for
//! boundary classification, and a tally of repaired pixels by class.
//!
//! ## Design notes
//!
//! * **Copy vs. in place**: `image` is `Some` only in copy mode; in place the
//!   caller's own grid already holds the result.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `tally.total()` equals the number of flagged pixels supplied.
//! * When present, `image` has the same shape as the input grid.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use ndarray::Array3;

// Internal dependencies
use crate::algorithms::repair::RepairTally;
use crate::math::boundary::GridExtent;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of repairing a list of flagged pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairResult<T> {
    /// Repaired copy of the grid; `None` when repaired in place.
    pub image: Option<Array3<T>>,

    /// Extent used for interior/edge/corner classification.
    pub extent: GridExtent,

    /// Repaired pixel counts by boundary class.
    pub tally: RepairTally,
}

impl<T> RepairResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if the repair was applied to a copy.
    pub fn is_copy(&self) -> bool {
        self.image.is_some()
    }

    /// Number of pixels repaired.
    pub fn repaired(&self) -> usize {
        self.tally.total()
    }

    /// Take the repaired copy, if one was produced.
    pub fn into_image(self) -> Option<Array3<T>> {
        self.image
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T> Display for RepairResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Extent:      {} x {}",
            self.extent.rows, self.extent.cols
        )?;
        writeln!(
            f,
            "  Mode:        {}",
            if self.is_copy() { "copy" } else { "in place" }
        )?;
        writeln!(f, "  Repaired:    {}", self.tally.total())?;
        writeln!(f)?;
        writeln!(f, "Pixels by class:")?;
        writeln!(f, "  Interior (4 neighbors): {}", self.tally.interior)?;
        writeln!(f, "  Edge     (3 neighbors): {}", self.tally.edge)?;
        write!(f, "  Corner   (2 neighbors): {}", self.tally.corner)
    }
}
