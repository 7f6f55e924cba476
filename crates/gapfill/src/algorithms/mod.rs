//! Layer 3: Algorithms
//!
//! This layer implements the core reconstruction logic: the shared bracket
//! search, piecewise linear and local cubic Lagrange interpolation, and
//! neighbor-average pixel repair. It is orchestrated by the engine layer.

// Bracket interval search shared by both interpolators.
pub mod bracket;

// Piecewise linear interpolation.
pub mod linear;

// Piecewise local cubic (4-point Lagrange) interpolation.
pub mod cubic;

// Ordered neighbor-average pixel repair.
pub mod repair;
