//! Boundary classification for pixel neighborhoods.
//!
//! ## Purpose
//!
//! This module decides which orthogonal neighbors of a grid cell exist, based
//! on whether the cell lies in the interior, on an edge, or on a corner of the
//! grid extent.
//!
//! ## Design notes
//!
//! * **Orthogonal only**: Up, down, left and right; diagonals are never used.
//! * **Allocation-free**: Neighborhoods are stored inline (at most four cells).
//! * **Fixed order**: Neighbors are listed down, right, left, up.
//!
//! ## Key concepts
//!
//! * **Interior**: Not on the first/last row or column; four neighbors.
//! * **Edge**: On exactly one of the first/last row or column; three neighbors.
//! * **Corner**: On a first/last row and a first/last column; two neighbors.
//!
//! ## Invariants
//!
//! * The extent is at least 2x2, so every cell has at least two neighbors.
//! * Every neighbor lies inside the extent.
//!
//! ## Non-goals
//!
//! * This module does not check that the cell itself lies inside the extent.

// ============================================================================
// Grid Extent
// ============================================================================

/// Rows and columns used to classify cells as interior, edge, or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridExtent {
    /// Number of rows; the last row index is `rows - 1`.
    pub rows: usize,

    /// Number of columns; the last column index is `cols - 1`.
    pub cols: usize,
}

impl GridExtent {
    /// Create an extent of `rows x cols` cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `(row, col)` lies inside the extent.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Classify a cell and list its orthogonal neighbors.
    pub fn neighborhood(&self, row: usize, col: usize) -> Neighborhood {
        let last_row = self.rows - 1;
        let last_col = self.cols - 1;

        let mut cells = [(0, 0); 4];
        let mut len = 0;
        let mut push = |cell: (usize, usize)| {
            cells[len] = cell;
            len += 1;
        };

        if row < last_row {
            push((row + 1, col));
        }
        if col < last_col {
            push((row, col + 1));
        }
        if col > 0 {
            push((row, col - 1));
        }
        if row > 0 {
            push((row - 1, col));
        }

        let on_row_edge = row == 0 || row == last_row;
        let on_col_edge = col == 0 || col == last_col;
        let class = match (on_row_edge, on_col_edge) {
            (true, true) => PixelClass::Corner,
            (true, false) | (false, true) => PixelClass::Edge,
            (false, false) => PixelClass::Interior,
        };

        Neighborhood { class, cells, len }
    }
}

// ============================================================================
// Neighborhood
// ============================================================================

/// Position of a cell relative to the grid boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Four orthogonal neighbors.
    Interior,

    /// Three orthogonal neighbors.
    Edge,

    /// Two orthogonal neighbors.
    Corner,
}

/// Orthogonal neighbors of a cell, in down/right/left/up order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    /// Boundary class of the cell.
    pub class: PixelClass,

    cells: [(usize, usize); 4],
    len: usize,
}

impl Neighborhood {
    /// The neighboring cells as `(row, col)` pairs.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells[..self.len]
    }

    /// Number of neighbors: 4, 3 or 2 by class.
    pub fn count(&self) -> usize {
        self.len
    }
}
