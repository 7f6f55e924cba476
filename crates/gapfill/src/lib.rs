//! # gapfill: reconstruction of missing samples for Rust
//!
//! Fill in values that are missing from, or known to be bad in, discrete
//! data: tabulated 1-D functions and RGB image grids.
//!
//! ## What is in the box?
//!
//! - **Piecewise linear interpolation** of a strictly increasing `(x, y)`
//!   table on the closed domain `[x_0, x_{n-1}]`.
//! - **Piecewise local cubic interpolation** through 4-point Lagrange
//!   stencils on the half-open domain `[x_1, x_{n-2})`. Data sampled from a
//!   cubic polynomial is reproduced exactly.
//! - **Pixel repair**: each flagged pixel of an `H x W x 3` grid is replaced
//!   by the per-channel average of its orthogonal neighbors, with interior,
//!   edge and corner pixels averaging 4, 3 and 2 neighbors respectively.
//!
//! ## Quick Start
//!
//! ### Interpolation
//!
//! ```rust
//! use gapfill::prelude::*;
//!
//! let xp: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let yp: Vec<f64> = vec![0.0, 1.0, 8.0, 27.0];
//!
//! let linear = Interpolator::new().method(Linear).build()?;
//! let cubic = Interpolator::new().method(CubicLagrange).build()?;
//!
//! // Single points give a single result.
//! assert_eq!(linear.interpolate_at(1.5, &xp, &yp)?, Some(4.5));
//! assert!((cubic.interpolate_at(1.5, &xp, &yp)?.unwrap() - 3.375).abs() < 1e-12);
//!
//! // Sequence queries give sequences; `None` marks queries outside the domain.
//! let fitted = linear.fit(&xp, &yp)?;
//! let yq = fitted.evaluate(&vec![-1.0, 0.5, 3.0, 4.0])?;
//! assert_eq!(yq, vec![None, Some(0.5), Some(27.0), None]);
//! # Result::<(), GapfillError>::Ok(())
//! ```
//!
//! ### Pixel repair
//!
//! ```rust
//! use gapfill::prelude::*;
//! use ndarray::Array3;
//!
//! let mut grid = Array3::<f32>::zeros((4, 4, 3));
//! grid[[1, 0, 0]] = 0.2;
//! grid[[0, 1, 0]] = 0.4;
//!
//! let fixer = PixelRepair::new().build()?;
//! let result = fixer.repair(&mut grid, &[(0, 0)])?;
//!
//! let fixed = result.into_image().unwrap();
//! assert!((fixed[[0, 0, 0]] - 0.3).abs() < 1e-6);
//! // Copy mode (the default) leaves the input untouched.
//! assert_eq!(grid[[0, 0, 0]], 0.0);
//!
//! // Read-only grids and views can always be repaired into a copy.
//! let again = fixer.repair_copy(&grid.view(), &[(0, 0)])?;
//! assert_eq!(again.repaired(), 1);
//! # Result::<(), GapfillError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, GapfillError>`. Malformed inputs (empty
//! or mismatched tables, non-finite or non-increasing x, grids that are not
//! `H x W x 3`, flagged pixels outside the grid) fail immediately and
//! nothing is computed or written. Queries outside an interpolant's domain
//! are not errors; they produce `None`. Use [`prelude::MissingAsNan`] to turn
//! those into NaN.
//!
//! ### Ordering
//!
//! Pixels are repaired in list order and later repairs read earlier ones:
//! with `[(5, 5), (5, 6)]`, the value written at `(5, 6)` uses the already
//! repaired `(5, 5)`. Reordering the list can change the result.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: operation
//! summaries at `debug` and every repaired pixel at `trace`. Install any
//! logger (e.g. `env_logger`) to see them.

// Layer 1: Primitives - errors, domains, and input abstractions.
mod primitives;

// Layer 2: Math - Lagrange basis and boundary classification.
mod math;

// Layer 3: Algorithms - bracket search, interpolation, and repair.
mod algorithms;

// Layer 4: Engine - validation, execution, and output.
mod engine;

// High-level fluent API.
mod api;

// Standard gapfill prelude.
pub mod prelude {
    pub use crate::api::{
        Domain, FittedInterpolator, GapfillError, GridExtent, InterpolationModel,
        InterpolatorBuilder as Interpolator, Method,
        Method::CubicLagrange,
        Method::Linear,
        MissingAsNan, PixelClass, PixelRepairBuilder as PixelRepair, PixelRepairModel,
        RepairResult, RepairTally,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
