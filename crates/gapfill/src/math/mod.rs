//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Lagrange basis polynomials on small stencils
//! - Grid boundary classification for orthogonal neighborhoods
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lagrange basis evaluation.
pub mod lagrange;

/// Interior/edge/corner classification.
pub mod boundary;
