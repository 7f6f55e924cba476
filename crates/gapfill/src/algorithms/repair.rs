//! Neighbor-average repair of flagged pixels.
//!
//! ## Purpose
//!
//! Replaces the RGB values of flagged pixels with the per-channel average of
//! their orthogonal neighbors.
//!
//! ## Design notes
//!
//! * **In place**: Operates on a mutable grid; copying is decided by the caller.
//! * **Ordered**: Pixels are repaired in list order and every neighbor read
//!   sees the grid as it is at that moment. When two flagged pixels are
//!   neighbors, the later one averages over the earlier one's repaired value.
//! * **Per channel**: Each channel is averaged independently over the same
//!   neighbor set.
//!
//! ## Invariants
//!
//! * The grid has shape `rows x cols x 3` with `extent` inside it.
//! * Every flagged pixel lies inside `extent` (checked upstream).
//!
//! ## Non-goals
//!
//! * This module does not detect defective pixels.
//! * Results are not permutation-invariant, and no attempt is made to make them so.

// External dependencies
use log::trace;
use ndarray::{ArrayBase, DataMut, Ix3};
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::{GridExtent, PixelClass};

/// Number of color channels in a grid.
pub const CHANNELS: usize = 3;

// ============================================================================
// Tally
// ============================================================================

/// Count of repaired pixels by boundary class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairTally {
    /// Pixels averaged over four neighbors.
    pub interior: usize,

    /// Pixels averaged over three neighbors.
    pub edge: usize,

    /// Pixels averaged over two neighbors.
    pub corner: usize,
}

impl RepairTally {
    /// Total number of repaired pixels.
    pub fn total(&self) -> usize {
        self.interior + self.edge + self.corner
    }

    fn record(&mut self, class: PixelClass) {
        match class {
            PixelClass::Interior => self.interior += 1,
            PixelClass::Edge => self.edge += 1,
            PixelClass::Corner => self.corner += 1,
        }
    }
}

// ============================================================================
// Repair
// ============================================================================

/// Repair one pixel from the current state of its neighbors.
pub fn repair_pixel<T, S>(
    grid: &mut ArrayBase<S, Ix3>,
    extent: &GridExtent,
    row: usize,
    col: usize,
) -> PixelClass
where
    T: Float,
    S: DataMut<Elem = T>,
{
    let neighborhood = extent.neighborhood(row, col);

    let mut sums = [T::zero(); CHANNELS];
    let mut count = T::zero();
    for &(r, c) in neighborhood.cells() {
        for (ch, sum) in sums.iter_mut().enumerate() {
            *sum = *sum + grid[[r, c, ch]];
        }
        count = count + T::one();
    }

    for (ch, sum) in sums.into_iter().enumerate() {
        grid[[row, col, ch]] = sum / count;
    }

    trace!(
        "repaired pixel ({row}, {col}) as {:?} from {} neighbors",
        neighborhood.class,
        neighborhood.count()
    );
    neighborhood.class
}

/// Repair every flagged pixel, strictly in list order.
pub fn repair_all<T, S>(
    grid: &mut ArrayBase<S, Ix3>,
    extent: &GridExtent,
    pixels: &[(usize, usize)],
) -> RepairTally
where
    T: Float,
    S: DataMut<Elem = T>,
{
    let mut tally = RepairTally::default();
    for &(row, col) in pixels {
        tally.record(repair_pixel(grid, extent, row, col));
    }
    tally
}
