//! Layer 1: Scalar
//!
//! # Purpose
//!
//! This layer provides the pure scalar functions used throughout the host
//! renderer:
//! - Angle conversion and normalization
//! - Basic arithmetic and integer exponentiation
//! - Power-of-two bit tricks
//! - Clamping, wrapping, and floor-style modulo
//! - Truncation and rounding
//! - Interpolation and affine range remapping
//! - Tolerance-based floating-point comparison
//!
//! Every function here is stateless and re-entrant. There are no
//! dependencies between the submodules beyond straightforward composition
//! (`mix` calls `lerp`, `round` calls `truncate`).
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Light
//!   ↓
//! Layer 1: Scalar ← You are here
//! ```

/// Mathematical constants in double precision.
pub mod consts;

/// Angle conversion between degrees and radians.
pub mod convert;

/// Basic arithmetic and integer exponentiation.
pub mod arith;

/// Power-of-two bit tricks.
pub mod bits;

/// Clamping, wrapping, and floor-style modulo.
pub mod range;

/// Truncation and rounding.
pub mod round;

/// Interpolation and range remapping.
pub mod interp;

/// Robust floating-point comparison.
pub mod cmp;
