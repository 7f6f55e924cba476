//! Input abstractions for sample tables and query sets.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for interpolation inputs, so
//! that sample tables and query sets can be passed as slices, vectors,
//! fixed-size arrays, or `ndarray` vectors, and so that results come back in
//! the same shape as the query that produced them.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Shape mirroring**: A query sequence yields a result sequence of the same shape.
//!   Single points go through `T`-typed entry points instead, so that plain float
//!   literals infer their precision from the sample table.
//! * **Fail-fast validation**: Non-contiguous `ndarray` inputs are rejected up front.
//!
//! ## Key concepts
//!
//! * **SampleInput**: Types that can provide a contiguous slice of sample coordinates.
//! * **Queries**: Types that can provide query points and rebuild their own shape from results.
//! * **Missing-value sentinel**: `None` marks a query outside the supported domain.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container, in order.
//! * `reshape` receives exactly one result per query value.
//!
//! ## Non-goals
//!
//! * This module does not validate sample ordering or finiteness.
//! * This module does not handle multi-dimensional query grids.

// External dependencies
use ndarray::{Array1, ArrayBase, Data, Ix1};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GapfillError;

// ============================================================================
// Sample Input
// ============================================================================

/// Trait for types that can be used as a sample-table column.
pub trait SampleInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_sample_slice(&self) -> Result<&[T], GapfillError>;
}

impl<T: Float> SampleInput<T> for [T] {
    fn as_sample_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self)
    }
}

impl<T: Float> SampleInput<T> for Vec<T> {
    fn as_sample_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> SampleInput<T> for [T; N] {
    fn as_sample_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SampleInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sample_slice(&self) -> Result<&[T], GapfillError> {
        self.as_slice().ok_or_else(|| {
            GapfillError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Query Input
// ============================================================================

/// Trait for query sequences whose results mirror their own shape.
pub trait Queries<T: Float> {
    /// Result container with the same shape as the query.
    type Output;

    /// View the query points as a contiguous slice.
    fn as_query_slice(&self) -> Result<&[T], GapfillError>;

    /// Rebuild the query's shape from one result per query point.
    fn reshape(&self, values: Vec<Option<T>>) -> Self::Output;
}

impl<T: Float> Queries<T> for [T] {
    type Output = Vec<Option<T>>;

    fn as_query_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self)
    }

    fn reshape(&self, values: Vec<Option<T>>) -> Self::Output {
        values
    }
}

impl<T: Float> Queries<T> for Vec<T> {
    type Output = Vec<Option<T>>;

    fn as_query_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self.as_slice())
    }

    fn reshape(&self, values: Vec<Option<T>>) -> Self::Output {
        values
    }
}

impl<T: Float, const N: usize> Queries<T> for [T; N] {
    type Output = [Option<T>; N];

    fn as_query_slice(&self) -> Result<&[T], GapfillError> {
        Ok(self.as_slice())
    }

    fn reshape(&self, values: Vec<Option<T>>) -> Self::Output {
        core::array::from_fn(|i| values.get(i).copied().flatten())
    }
}

impl<T: Float, S> Queries<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    type Output = Array1<Option<T>>;

    fn as_query_slice(&self) -> Result<&[T], GapfillError> {
        self.as_slice().ok_or_else(|| {
            GapfillError::InvalidInput("ndarray query must be contiguous in memory".to_string())
        })
    }

    fn reshape(&self, values: Vec<Option<T>>) -> Self::Output {
        Array1::from(values)
    }
}

// ============================================================================
// NaN Conversion
// ============================================================================

/// Replace the missing-value sentinel with NaN.
///
/// For callers that prefer the floating-point convention over `Option`.
pub trait MissingAsNan {
    /// Container of plain floats.
    type Output;

    /// Map every `None` to NaN and unwrap every `Some`.
    fn or_nan(self) -> Self::Output;
}

impl<T: Float> MissingAsNan for Option<T> {
    type Output = T;

    fn or_nan(self) -> T {
        self.unwrap_or_else(T::nan)
    }
}

impl<T: Float> MissingAsNan for Vec<Option<T>> {
    type Output = Vec<T>;

    fn or_nan(self) -> Vec<T> {
        self.into_iter().map(MissingAsNan::or_nan).collect()
    }
}

impl<T: Float, const N: usize> MissingAsNan for [Option<T>; N] {
    type Output = [T; N];

    fn or_nan(self) -> [T; N] {
        self.map(MissingAsNan::or_nan)
    }
}

impl<T: Float> MissingAsNan for Array1<Option<T>> {
    type Output = Array1<T>;

    fn or_nan(self) -> Array1<T> {
        self.mapv(MissingAsNan::or_nan)
    }
}
