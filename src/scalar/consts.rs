//! Mathematical constants in double precision.
//!
//! These mirror the constants the rest of the renderer reaches for most
//! often. Narrow to `f32` at the call site when needed.

/// Archimedes' constant.
pub const PI: f64 = core::f64::consts::PI;

/// 2π, one full turn in radians.
pub const TWO_PI: f64 = core::f64::consts::TAU;

/// π/2, a quarter turn in radians.
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// 1/π.
pub const RCP_PI: f64 = core::f64::consts::FRAC_1_PI;

/// 1/(2π).
pub const RCP_TWO_PI: f64 = 1.0 / core::f64::consts::TAU;

/// 1/(π/2) = 2/π.
pub const RCP_HALF_PI: f64 = core::f64::consts::FRAC_2_PI;
