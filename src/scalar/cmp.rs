//! Robust floating-point comparison.
//!
//! ## Purpose
//!
//! This module provides the tolerance-based equality and zero tests used
//! throughout the renderer. The equality test is ratio-based so that it is
//! robust to the scale of its operands: values near 1e20 and values near
//! 1e-20 are compared with the same relative tolerance.
//!
//! ## Design notes
//!
//! * **Zero operands**: a relative comparison is meaningless when one
//!   operand is exactly zero, so the other operand's magnitude is compared
//!   against the epsilon directly.
//! * **Overflow/underflow**: if the ratio `lhs/rhs` would overflow or
//!   underflow the type's representable range, the operands are declared
//!   unequal instead of letting `inf`/`NaN` leak into the comparison.
//! * **Integers**: the integer implementations accept an epsilon for
//!   signature uniformity and ignore it; integers compare exactly.
//!
//! ## Key concepts
//!
//! * **Default epsilon**: `1.0e-6` for `f32`, `1.0e-14` for `f64`.
//!
//! ## Non-goals
//!
//! * ULP-based comparison is future work and is not implemented here.

// External dependencies
use num_traits::Float;

// ============================================================================
// Approximate Comparison Trait
// ============================================================================

/// Tolerance-based comparison with a per-type default epsilon.
pub trait ApproxCmp: Copy {
    /// Default tolerance for this type.
    fn default_eps() -> Self;

    /// Approximate equality test with an explicit epsilon.
    fn feq_eps(self, rhs: Self, eps: Self) -> bool;

    /// Approximate zero test with an explicit epsilon.
    fn fz_eps(self, eps: Self) -> bool;
}

// Ratio-based equality shared by the float implementations.
#[inline]
fn feq_float<T: Float>(lhs: T, rhs: T, eps: T) -> bool {
    // Handle case where lhs is exactly +0.0 or -0.0.
    if lhs == T::zero() {
        return rhs.abs() < eps;
    }

    // Handle case where rhs is exactly +0.0 or -0.0.
    if rhs == T::zero() {
        return lhs.abs() < eps;
    }

    let abs_lhs = lhs.abs();
    let abs_rhs = rhs.abs();

    // No equality if lhs/rhs overflows.
    if abs_rhs < T::one() && abs_lhs > abs_rhs * T::max_value() {
        return false;
    }

    // No equality if lhs/rhs underflows.
    if abs_rhs > T::one() && abs_lhs < abs_rhs * T::min_positive_value() {
        return false;
    }

    // There is equality if the ratio lhs/rhs is close enough to 1.
    let ratio = lhs / rhs;
    ratio > T::one() - eps && ratio < T::one() + eps
}

macro_rules! impl_approx_cmp_float {
    ($($t:ty => $eps:expr),+ $(,)?) => {
        $(
            impl ApproxCmp for $t {
                #[inline]
                fn default_eps() -> Self {
                    $eps
                }

                #[inline]
                fn feq_eps(self, rhs: Self, eps: Self) -> bool {
                    feq_float(self, rhs, eps)
                }

                #[inline]
                fn fz_eps(self, eps: Self) -> bool {
                    self.abs() < eps
                }
            }
        )+
    };
}

macro_rules! impl_approx_cmp_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ApproxCmp for $t {
                #[inline]
                fn default_eps() -> Self {
                    0
                }

                // eps is not used; integers always compare exactly.
                #[inline]
                fn feq_eps(self, rhs: Self, _eps: Self) -> bool {
                    self == rhs
                }

                #[inline]
                fn fz_eps(self, _eps: Self) -> bool {
                    self == 0
                }
            }
        )+
    };
}

impl_approx_cmp_float! {
    f32 => 1.0e-6,
    f64 => 1.0e-14,
}

impl_approx_cmp_int!(i32, i64);

// ============================================================================
// Free Functions
// ============================================================================

/// Approximate equality test with the default epsilon of the type.
#[inline]
pub fn feq<T: ApproxCmp>(lhs: T, rhs: T) -> bool {
    lhs.feq_eps(rhs, T::default_eps())
}

/// Approximate equality test with an explicit epsilon.
#[inline]
pub fn feq_eps<T: ApproxCmp>(lhs: T, rhs: T, eps: T) -> bool {
    lhs.feq_eps(rhs, eps)
}

/// Approximate zero test with the default epsilon of the type.
#[inline]
pub fn fz<T: ApproxCmp>(x: T) -> bool {
    x.fz_eps(T::default_eps())
}

/// Approximate zero test with an explicit epsilon.
#[inline]
pub fn fz_eps<T: ApproxCmp>(x: T, eps: T) -> bool {
    x.fz_eps(eps)
}
