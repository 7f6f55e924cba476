//! Error types for gap-filling operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while interpolating
//! tabulated data or repairing flagged pixels, including sample-table
//! validation, grid shape constraints, and coordinate bounds.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misuse is recorded and reported when `build()` is called.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Sample validation**: Empty tables, mismatched lengths, non-finite or non-increasing x.
//! 2. **Grid validation**: Wrong channel count, degenerate extents, oversized extent overrides.
//! 3. **Coordinate validation**: Flagged pixels outside the grid extent.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Out-of-domain interpolation queries are never errors.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for gap-filling operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GapfillError {
    /// The sample table is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Sample x-coordinates must be strictly increasing.
    NotIncreasing {
        /// First index whose x-value does not exceed its predecessor.
        index: usize,
    },

    /// Number of samples is below the minimum for the selected method.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// The image grid is not `rows x cols x 3` or is too small to repair.
    InvalidGrid {
        /// Shape of the grid that was supplied.
        shape: [usize; 3],
    },

    /// The requested grid extent does not fit inside the image grid.
    InvalidExtent {
        /// Requested `(rows, cols)`.
        extent: (usize, usize),
        /// Actual `(rows, cols)` of the grid.
        grid: (usize, usize),
    },

    /// A flagged coordinate lies outside the grid extent.
    OutOfBounds {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        col: usize,
        /// Number of rows in the extent.
        rows: usize,
        /// Number of columns in the extent.
        cols: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GapfillError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NotIncreasing { index } => write!(
                f,
                "Data x-coordinates must be strictly increasing (violated at index {index})"
            ),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidGrid { shape } => write!(
                f,
                "Invalid grid shape: {}x{}x{} (expected at least 2x2x3 with 3 channels)",
                shape[0], shape[1], shape[2]
            ),
            Self::InvalidExtent { extent, grid } => write!(
                f,
                "Invalid extent: {}x{} (must be at least 2x2 and fit in grid {}x{})",
                extent.0, extent.1, grid.0, grid.1
            ),
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Pixel ({row}, {col}) is outside the {rows}x{cols} grid extent"
            ),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for GapfillError {}
