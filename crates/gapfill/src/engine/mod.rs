//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates interpolation and repair by coordinating
//! validation with the algorithms layer, and defines the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution of interpolation queries and repair runs.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for repair runs.
pub mod output;
