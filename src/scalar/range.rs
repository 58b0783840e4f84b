//! Clamping, wrapping, and floor-style modulo.
//!
//! ## Purpose
//!
//! This module reduces values into canonical ranges: clamping to an
//! interval, saturating to the unit interval, wrapping fractional values
//! into `[0, 1)`, normalizing angles into `[0, 2π)`, and a modulo that is
//! always non-negative.
//!
//! ## Invariants
//!
//! * `clamp` requires `min <= max` (asserted in debug builds).
//! * `wrap`, `normalize_angle`, and `modulo` always return a value in the
//!   half-open target range for finite input.
//!
//! ## Non-goals
//!
//! * This module does not handle NaN specially; NaN propagates.

// External dependencies
use num_traits::{Float, One, Zero};

// Internal dependencies
use crate::scalar::consts::TWO_PI;

// ============================================================================
// Clamping
// ============================================================================

/// Clamp the argument to `[min, max]`.
#[inline]
pub fn clamp<T: PartialOrd + Copy>(x: T, min: T, max: T) -> T {
    debug_assert!(min <= max);

    if x <= min {
        min
    } else if x >= max {
        max
    } else {
        x
    }
}

/// Clamp the argument to `[0, 1]`.
#[inline]
pub fn saturate<T>(x: T) -> T
where
    T: Zero + One + PartialOrd + Copy,
{
    if x <= T::zero() {
        T::zero()
    } else if x >= T::one() {
        T::one()
    } else {
        x
    }
}

// ============================================================================
// Wrapping and Angle Normalization
// ============================================================================

/// Wrap the argument back to `[0, 1)`.
#[inline]
pub fn wrap<T: Float>(x: T) -> T {
    let y = x % T::one();
    if y < T::zero() {
        y + T::one()
    } else {
        y
    }
}

/// Normalize an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle<T: Float>(angle: T) -> T {
    let two_pi = T::from(TWO_PI).unwrap();
    let a = angle % two_pi;
    if a < T::zero() {
        a + two_pi
    } else {
        a
    }
}

// ============================================================================
// Floor-Style Modulo
// ============================================================================

/// Modulo that always returns a non-negative result in `[0, n)`.
///
/// Integer types use integer remainder, float types use float remainder,
/// each followed by a sign-correcting add of `n` when the remainder is
/// negative.
pub trait Modulo: Copy {
    /// Compute `self mod n` with a non-negative result.
    fn modulo(self, n: Self) -> Self;
}

macro_rules! impl_modulo_signed {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Modulo for $t {
                #[inline]
                fn modulo(self, n: Self) -> Self {
                    let m = self % n;
                    if m < 0 { n + m } else { m }
                }
            }
        )+
    };
}

macro_rules! impl_modulo_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Modulo for $t {
                #[inline]
                fn modulo(self, n: Self) -> Self {
                    self % n
                }
            }
        )+
    };
}

macro_rules! impl_modulo_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Modulo for $t {
                #[inline]
                fn modulo(self, n: Self) -> Self {
                    let m = self % n;
                    if m < 0.0 { n + m } else { m }
                }
            }
        )+
    };
}

impl_modulo_signed!(i32, i64, isize);
impl_modulo_unsigned!(u32, u64, usize);
impl_modulo_float!(f32, f64);

/// Compute `a mod n` and always return a non-negative value.
#[inline]
pub fn modulo<T: Modulo>(a: T, n: T) -> T {
    a.modulo(n)
}
