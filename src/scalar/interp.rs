//! Interpolation and affine range remapping.
//!
//! ## Purpose
//!
//! This module provides the transition and blending functions used in
//! shading and parameter mapping: linear and cubic-Hermite step functions,
//! clamped and unclamped linear interpolation, and affine remapping between
//! ranges.
//!
//! ## Key concepts
//!
//! * **linearstep/smoothstep**: 0 below `a`, 1 above `b`, a ramp in
//!   between. `smoothstep` uses the Hermite ramp `y²(3 - 2y)`, which has
//!   zero first derivative at both ends.
//! * **lerp vs. mix**: `lerp` is unclamped; `mix` clamps the blend factor
//!   to `[0, 1]` before delegating to `lerp`.
//! * **fit**: affine remap from `[min_x, max_x]` to `[min_y, max_y]`,
//!   extrapolating linearly outside the source range.
//!
//! ## Invariants
//!
//! * `linearstep`/`smoothstep` require `a < b` (asserted in debug builds).
//! * `fit` requires `min_x != max_x` and `min_y != max_y` (asserted).

// External dependencies
use num_traits::Float;

// ============================================================================
// Step Functions
// ============================================================================

/// Return 0 for `x <= a`, 1 for `x >= b`, and a linear transition from 0
/// to 1 between `x = a` and `x = b`.
#[inline]
pub fn linearstep<T: Float>(a: T, b: T, x: T) -> T {
    debug_assert!(a < b);

    if x <= a {
        T::zero()
    } else if x >= b {
        T::one()
    } else {
        (x - a) / (b - a)
    }
}

/// Return 0 for `x <= a`, 1 for `x >= b`, and a smooth transition from 0
/// to 1 between `x = a` and `x = b`, with zero first derivative at both
/// ends.
#[inline]
pub fn smoothstep<T: Float>(a: T, b: T, x: T) -> T {
    debug_assert!(a < b);

    if x <= a {
        return T::zero();
    }
    if x >= b {
        return T::one();
    }

    let y = (x - a) / (b - a);
    y * y * (T::from(3.0).unwrap() - y - y)
}

// ============================================================================
// Linear Blending
// ============================================================================

/// Return the linear interpolation `(1 - x) * a + x * b`, unclamped.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, x: T) -> T {
    (T::one() - x) * a + x * b
}

/// Return `a` for `x <= 0`, `b` for `x >= 1`, and a linear blend between
/// `a` and `b` when `x` is between 0 and 1.
#[inline]
pub fn mix<T: Float>(a: T, b: T, x: T) -> T {
    if x <= T::zero() {
        a
    } else if x >= T::one() {
        b
    } else {
        lerp(a, b, x)
    }
}

// ============================================================================
// Range Remapping
// ============================================================================

/// Remap `x` from the range `[min_x, max_x]` to the range
/// `[min_y, max_y]`, extrapolating linearly when `x` is outside the source
/// range.
#[inline]
pub fn fit<T: Float>(x: T, min_x: T, max_x: T, min_y: T, max_y: T) -> T {
    debug_assert!(min_x != max_x);
    debug_assert!(min_y != max_y);

    let k = (x - min_x) / (max_x - min_x);
    min_y * (T::one() - k) + max_y * k
}
