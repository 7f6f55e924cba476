//! Execution engine for interpolation and pixel repair.
//!
//! ## Purpose
//!
//! This module runs validated inputs through the algorithms layer. It
//! dispatches each query to the selected interpolation method and drives the
//! ordered repair of flagged pixels, choosing between a copied and an
//! in-place grid.
//!
//! ## Design notes
//!
//! * **Independent queries**: Each query is evaluated on its own; one query
//!   falling outside the domain does not affect the others.
//! * **Validate, then run**: Every check happens before the first write, so a
//!   failed repair never leaves a partially modified grid.
//! * **Copy means copy**: In copy mode the caller's grid is never written.
//!
//! ## Invariants
//!
//! * Exactly one result per query, in query order.
//! * Flagged pixels are repaired in list order.
//!
//! ## Non-goals
//!
//! * This module does not own the input data; it borrows it for one call.
//! * No parallelism: the ordered repair is inherently sequential.

// External dependencies
use log::debug;
use ndarray::{ArrayBase, Data, DataMut, Ix3, RawData};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::repair::{repair_all, RepairTally};
use crate::algorithms::{cubic, linear};
use crate::engine::output::RepairResult;
use crate::engine::validator::Validator;
use crate::math::boundary::GridExtent;
use crate::primitives::domain::Domain;
use crate::primitives::errors::GapfillError;

// ============================================================================
// Interpolation Method
// ============================================================================

/// 1-D interpolation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Piecewise linear; domain `[x_0, x_{n-1}]`.
    #[default]
    Linear,

    /// Piecewise local cubic through 4-point Lagrange stencils; domain `[x_1, x_{n-2})`.
    CubicLagrange,
}

impl Method {
    /// Short name used in logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Linear => "linear",
            Method::CubicLagrange => "cubic-lagrange",
        }
    }

    /// Minimum number of samples the method needs.
    pub fn min_points(&self) -> usize {
        match self {
            Method::Linear => linear::MIN_POINTS,
            Method::CubicLagrange => cubic::MIN_POINTS,
        }
    }

    /// Supported query domain for a validated table.
    pub fn domain<T: Float>(&self, xp: &[T]) -> Domain<T> {
        match self {
            Method::Linear => linear::domain(xp),
            Method::CubicLagrange => cubic::domain(xp),
        }
    }

    /// Interpolate a single query against a validated table.
    #[inline]
    pub fn interpolate<T: Float>(&self, xp: &[T], yp: &[T], x: T) -> Option<T> {
        match self {
            Method::Linear => linear::interpolate(xp, yp, x),
            Method::CubicLagrange => cubic::interpolate(xp, yp, x),
        }
    }
}

// ============================================================================
// Interpolation Executor
// ============================================================================

/// Batch evaluator for interpolation queries.
pub struct InterpolationExecutor;

impl InterpolationExecutor {
    /// Validate a table for `method`.
    pub fn prepare<T: Float>(method: Method, xp: &[T], yp: &[T]) -> Result<(), GapfillError> {
        Validator::validate_samples(xp, yp)?;
        Validator::validate_min_points(xp.len(), method.min_points())?;
        debug!(
            "prepared {} interpolation over {} samples",
            method.name(),
            xp.len()
        );
        Ok(())
    }

    /// Evaluate every query; `None` marks a query outside the domain.
    pub fn evaluate<T: Float>(method: Method, xp: &[T], yp: &[T], queries: &[T]) -> Vec<Option<T>> {
        let values: Vec<Option<T>> = queries
            .iter()
            .map(|&x| method.interpolate(xp, yp, x))
            .collect();

        debug!(
            "{} interpolation: {} queries, {} outside domain",
            method.name(),
            values.len(),
            values.iter().filter(|v| v.is_none()).count()
        );
        values
    }
}

// ============================================================================
// Repair Executor
// ============================================================================

/// Configuration for a repair run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairConfig {
    /// Repair a copy of the grid instead of the grid itself when using `repair`.
    pub copy: bool,

    /// Extent used for boundary classification; the full grid when `None`.
    pub extent: Option<GridExtent>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            copy: true,
            extent: None,
        }
    }
}

/// Driver for ordered pixel repair.
pub struct RepairExecutor;

impl RepairExecutor {
    /// Validate the grid and pixels, then repair an owned copy of the grid.
    pub fn run_copy<T, S>(
        config: &RepairConfig,
        grid: &ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<RepairResult<T>, GapfillError>
    where
        T: Float,
        S: Data<Elem = T>,
    {
        let extent = Self::prepare(config, grid, pixels)?;

        let mut repaired = grid.to_owned();
        let tally = repair_all(&mut repaired, &extent, pixels);
        Self::log_summary(&tally, &extent, "on a copy");

        Ok(RepairResult {
            image: Some(repaired),
            extent,
            tally,
        })
    }

    /// Validate the grid and pixels, then repair the grid itself.
    pub fn run_in_place<T, S>(
        config: &RepairConfig,
        grid: &mut ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<RepairResult<T>, GapfillError>
    where
        T: Float,
        S: DataMut<Elem = T>,
    {
        let extent = Self::prepare(config, grid, pixels)?;

        let tally = repair_all(grid, &extent, pixels);
        Self::log_summary(&tally, &extent, "in place");

        Ok(RepairResult {
            image: None,
            extent,
            tally,
        })
    }

    /// Resolve the extent and check every pixel before anything is written.
    fn prepare<S: RawData>(
        config: &RepairConfig,
        grid: &ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<GridExtent, GapfillError> {
        let extent = Self::resolve_extent(config, grid)?;
        Validator::validate_pixels(pixels, extent)?;
        Ok(extent)
    }

    fn log_summary(tally: &RepairTally, extent: &GridExtent, mode: &str) {
        debug!(
            "repaired {} pixels ({} interior, {} edge, {} corner) in a {}x{} extent, {}",
            tally.total(),
            tally.interior,
            tally.edge,
            tally.corner,
            extent.rows,
            extent.cols,
            mode
        );
    }

    /// Check the grid shape and pick the classification extent.
    fn resolve_extent<S: RawData>(
        config: &RepairConfig,
        grid: &ArrayBase<S, Ix3>,
    ) -> Result<GridExtent, GapfillError> {
        let (rows, cols, channels) = grid.dim();
        Validator::validate_grid([rows, cols, channels])?;

        match config.extent {
            Some(extent) => {
                Validator::validate_extent(extent, (rows, cols))?;
                Ok(extent)
            }
            None => Ok(GridExtent::new(rows, cols)),
        }
    }
}
