//! High-level API for interpolation and pixel repair.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. It implements fluent
//! builders for configuring an interpolation method or a pixel repair run,
//! and the models they produce.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Builder parameters are checked when `.build()` is called;
//!   data is checked when it is supplied.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Shape-preserving**: Query results mirror the shape of the query.
//!
//! ## Key concepts
//!
//! ### Interpolation flow
//!
//! 1. Create an [`InterpolatorBuilder`] via `Interpolator::new()`.
//! 2. Choose a method with `.method(Linear)` or `.method(CubicLagrange)`.
//! 3. `.build()` into an [`InterpolationModel`], then `.fit(&xp, &yp)` a
//!    sample table and `.evaluate(&xq)` query sequences or `.at(x)` single points.
//!
//! ### Repair flow
//!
//! 1. Create a [`PixelRepairBuilder`] via `PixelRepair::new()`.
//! 2. Optionally set `.copy(false)` and `.extent(rows, cols)`.
//! 3. `.build()` into a [`PixelRepairModel`], then `.repair(&mut grid, &pixels)`.
//!    Read-only grids and views go through `.repair_copy(&grid, &pixels)`.

// External dependencies
use log::debug;
use ndarray::{ArrayBase, Data, DataMut, Ix3};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{InterpolationExecutor, RepairConfig, RepairExecutor};
use crate::engine::validator::Validator;
use crate::primitives::input::{Queries, SampleInput};

// Publicly re-exported types
pub use crate::algorithms::repair::RepairTally;
pub use crate::engine::executor::Method;
pub use crate::engine::output::RepairResult;
pub use crate::math::boundary::{GridExtent, PixelClass};
pub use crate::primitives::domain::Domain;
pub use crate::primitives::errors::GapfillError;
pub use crate::primitives::input::MissingAsNan;

// ============================================================================
// Interpolation Builder
// ============================================================================

/// Fluent builder for configuring a 1-D interpolation method.
#[derive(Debug, Clone, Default)]
pub struct InterpolatorBuilder {
    /// Interpolation method (default: Linear).
    pub method: Option<Method>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl InterpolatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            duplicate_param: None,
        }
    }

    /// Set the interpolation method.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<InterpolationModel, GapfillError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(InterpolationModel {
            method: self.method.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Interpolation Model
// ============================================================================

/// A configured interpolation method, ready to be fitted to a sample table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationModel {
    method: Method,
}

impl InterpolationModel {
    /// The configured method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Validate a sample table and bind it for evaluation.
    pub fn fit<'a, T, X, Y>(&self, xp: &'a X, yp: &'a Y) -> Result<FittedInterpolator<'a, T>, GapfillError>
    where
        T: Float,
        X: SampleInput<T> + ?Sized,
        Y: SampleInput<T> + ?Sized,
    {
        let xp = xp.as_sample_slice()?;
        let yp = yp.as_sample_slice()?;
        InterpolationExecutor::prepare(self.method, xp, yp)?;

        Ok(FittedInterpolator {
            method: self.method,
            xp,
            yp,
        })
    }

    /// Validate `(xp, yp)` and evaluate a single point in one call.
    ///
    /// Returns `Ok(None)` when `x` lies outside the method's domain.
    pub fn interpolate_at<T, X, Y>(&self, x: T, xp: &X, yp: &Y) -> Result<Option<T>, GapfillError>
    where
        T: Float,
        X: SampleInput<T> + ?Sized,
        Y: SampleInput<T> + ?Sized,
    {
        Ok(self.fit(xp, yp)?.at(x))
    }

    /// Validate `(xp, yp)` and evaluate a query sequence in one call.
    pub fn interpolate<T, Q, X, Y>(&self, query: &Q, xp: &X, yp: &Y) -> Result<Q::Output, GapfillError>
    where
        T: Float,
        Q: Queries<T> + ?Sized,
        X: SampleInput<T> + ?Sized,
        Y: SampleInput<T> + ?Sized,
    {
        self.fit(xp, yp)?.evaluate(query)
    }
}

/// An interpolation method bound to a validated, borrowed sample table.
#[derive(Debug, Clone, Copy)]
pub struct FittedInterpolator<'a, T> {
    method: Method,
    xp: &'a [T],
    yp: &'a [T],
}

impl<'a, T: Float> FittedInterpolator<'a, T> {
    /// The configured method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Interval of queries that receive a value rather than `None`.
    pub fn domain(&self) -> Domain<T> {
        self.method.domain(self.xp)
    }

    /// Evaluate at a single point; `None` outside the domain.
    pub fn at(&self, x: T) -> Option<T> {
        self.method.interpolate(self.xp, self.yp, x)
    }

    /// Evaluate a query sequence, returning results in the query's own shape.
    pub fn evaluate<Q>(&self, query: &Q) -> Result<Q::Output, GapfillError>
    where
        Q: Queries<T> + ?Sized,
    {
        let queries = query.as_query_slice()?;
        let values = InterpolationExecutor::evaluate(self.method, self.xp, self.yp, queries);
        Ok(query.reshape(values))
    }
}

// ============================================================================
// Repair Builder
// ============================================================================

/// Fluent builder for configuring a pixel repair run.
#[derive(Debug, Clone, Default)]
pub struct PixelRepairBuilder {
    /// Repair a copy of the grid (default: true).
    pub copy: Option<bool>,

    /// Classification extent (default: the grid's own rows and columns).
    pub extent: Option<GridExtent>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PixelRepairBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            copy: None,
            extent: None,
            duplicate_param: None,
        }
    }

    /// Repair a copy (`true`) or the caller's grid in place (`false`).
    pub fn copy(mut self, copy: bool) -> Self {
        if self.copy.is_some() {
            self.duplicate_param = Some("copy");
        }
        self.copy = Some(copy);
        self
    }

    /// Classify boundaries against a `rows x cols` extent instead of the full grid.
    pub fn extent(mut self, rows: usize, cols: usize) -> Self {
        if self.extent.is_some() {
            self.duplicate_param = Some("extent");
        }
        self.extent = Some(GridExtent::new(rows, cols));
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<PixelRepairModel, GapfillError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let config = RepairConfig {
            copy: self.copy.unwrap_or(true),
            extent: self.extent,
        };
        debug!("built pixel repair model: {:?}", config);
        Ok(PixelRepairModel { config })
    }
}

// ============================================================================
// Repair Model
// ============================================================================

/// A configured pixel repair run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRepairModel {
    config: RepairConfig,
}

impl PixelRepairModel {
    /// Whether repairs are applied to a copy.
    pub fn is_copy(&self) -> bool {
        self.config.copy
    }

    /// The extent override, if any.
    pub fn extent(&self) -> Option<GridExtent> {
        self.config.extent
    }

    /// Repair `pixels` of `grid` in list order, honoring the `copy` setting.
    ///
    /// In copy mode `grid` is left untouched and the repaired copy is returned
    /// in [`RepairResult::image`]; otherwise `grid` is modified in place.
    pub fn repair<T, S>(
        &self,
        grid: &mut ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<RepairResult<T>, GapfillError>
    where
        T: Float,
        S: DataMut<Elem = T>,
    {
        if self.config.copy {
            self.repair_copy(grid, pixels)
        } else {
            self.repair_in_place(grid, pixels)
        }
    }

    /// Repair a copy of a read-only grid, regardless of the `copy` setting.
    pub fn repair_copy<T, S>(
        &self,
        grid: &ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<RepairResult<T>, GapfillError>
    where
        T: Float,
        S: Data<Elem = T>,
    {
        RepairExecutor::run_copy(&self.config, grid, pixels)
    }

    /// Repair `grid` itself, regardless of the `copy` setting.
    pub fn repair_in_place<T, S>(
        &self,
        grid: &mut ArrayBase<S, Ix3>,
        pixels: &[(usize, usize)],
    ) -> Result<RepairResult<T>, GapfillError>
    where
        T: Float,
        S: DataMut<Elem = T>,
    {
        RepairExecutor::run_in_place(&self.config, grid, pixels)
    }
}
