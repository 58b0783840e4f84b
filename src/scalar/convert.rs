//! Angle conversion between degrees and radians.
//!
//! ## Purpose
//!
//! This module converts angles between degrees and radians, generic over
//! any floating-point type.
//!
//! ## Invariants
//!
//! * `deg_to_rad(rad_to_deg(x))` round-trips within the default epsilon of
//!   the type, and vice versa.
//!
//! ## Non-goals
//!
//! * This module does not normalize angles; see [`crate::scalar::range`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::scalar::consts::PI;

/// Convert an angle from degrees to radians.
#[inline]
pub fn deg_to_rad<T: Float>(angle: T) -> T {
    angle * T::from(PI / 180.0).unwrap()
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn rad_to_deg<T: Float>(angle: T) -> T {
    angle * T::from(180.0 / PI).unwrap()
}
