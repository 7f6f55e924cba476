//! Input validation for sample tables, image grids, and flagged pixels.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any
//! interpolation or repair takes place. It checks input lengths, finite
//! values, x-ordering, grid shape, and coordinate bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Strictly increasing x**: Required for bracket search and nonzero interval widths.
//! * **Method requirements**: 2 samples for linear, 4 for the cubic stencil.
//! * **Grid shape**: `rows x cols x 3`, at least 2x2 so every cell has neighbors.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::GridExtent;
use crate::primitives::errors::GapfillError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sample tables and repair inputs.
///
/// Provides static methods that return `Result<(), GapfillError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Table Validation
    // ========================================================================

    /// Validate a sample table: non-empty, equal lengths, finite, strictly increasing x.
    pub fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), GapfillError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(GapfillError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(GapfillError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
            if !xi.is_finite() {
                return Err(GapfillError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !yi.is_finite() {
                return Err(GapfillError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    yi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 4: Strictly increasing x
        if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(GapfillError::NotIncreasing { index: i + 1 });
        }

        Ok(())
    }

    /// Validate that a table has enough samples for the selected method.
    pub fn validate_min_points(n: usize, min: usize) -> Result<(), GapfillError> {
        if n < min {
            return Err(GapfillError::TooFewPoints { got: n, min });
        }
        Ok(())
    }

    // ========================================================================
    // Grid Validation
    // ========================================================================

    /// Validate that a grid is `rows x cols x 3` with at least 2 rows and columns.
    pub fn validate_grid(shape: [usize; 3]) -> Result<(), GapfillError> {
        let [rows, cols, channels] = shape;
        if channels != 3 || rows < 2 || cols < 2 {
            return Err(GapfillError::InvalidGrid { shape });
        }
        Ok(())
    }

    /// Validate that an extent is at least 2x2 and fits inside the grid.
    pub fn validate_extent(extent: GridExtent, grid: (usize, usize)) -> Result<(), GapfillError> {
        if extent.rows < 2 || extent.cols < 2 || extent.rows > grid.0 || extent.cols > grid.1 {
            return Err(GapfillError::InvalidExtent {
                extent: (extent.rows, extent.cols),
                grid,
            });
        }
        Ok(())
    }

    /// Validate that every flagged pixel lies inside the extent.
    pub fn validate_pixels(pixels: &[(usize, usize)], extent: GridExtent) -> Result<(), GapfillError> {
        if let Some(&(row, col)) = pixels.iter().find(|&&(r, c)| !extent.contains(r, c)) {
            return Err(GapfillError::OutOfBounds {
                row,
                col,
                rows: extent.rows,
                cols: extent.cols,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GapfillError> {
        if let Some(param) = duplicate_param {
            return Err(GapfillError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
