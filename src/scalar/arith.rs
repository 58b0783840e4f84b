//! Basic arithmetic and integer exponentiation.
//!
//! ## Purpose
//!
//! This module provides small arithmetic helpers shared across the
//! renderer: absolute value, squaring, integer exponentiation (both
//! const-evaluated and runtime), and factorial.
//!
//! ## Design notes
//!
//! * **Exponentiation order**: `pow_int` multiplies by `x` one factor at a
//!   time, O(p) multiplications. Callers rely on the exact multiplication
//!   order for non-associative value types, so it must not be replaced by
//!   exponentiation by squaring.
//! * **Overflow**: neither `pow_int`, `pow_const`, nor `factorial` checks
//!   for overflow; satisfying the value range is the caller's
//!   responsibility.
//!
//! ## Invariants
//!
//! * `factorial` requires `x >= 0` (asserted in debug builds).

// External dependencies
use core::ops::{Mul, Neg};
use num_traits::{One, PrimInt, Zero};

// ============================================================================
// Absolute Value and Square
// ============================================================================

/// Return the absolute value of the argument.
///
/// Works for any ordered negatable type, including integer types without a
/// built-in absolute-value method.
#[inline]
pub fn abs<T>(x: T) -> T
where
    T: Zero + Neg<Output = T> + PartialOrd + Copy,
{
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// Return the square of the argument.
#[inline]
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

// ============================================================================
// Integer Exponentiation
// ============================================================================

/// Const-evaluated integer exponentiation of the form `x^p`.
///
/// Evaluates at compile time in const contexts. Example:
/// `const N: i64 = pow_const(2, 8);` yields 256.
#[inline]
pub const fn pow_const(x: i64, p: u32) -> i64 {
    if p == 0 {
        1
    } else {
        x * pow_const(x, p - 1)
    }
}

/// Runtime integer exponentiation of the form `x^p`.
///
/// Accumulates one factor of `x` per step. Deliberately not exponentiation
/// by squaring: the multiplication order is part of the contract.
#[inline]
pub fn pow_int<T>(x: T, p: usize) -> T
where
    T: One + Mul<Output = T> + Copy,
{
    let mut y = T::one();
    let mut p = p;

    while p > 0 {
        y = y * x;
        p -= 1;
    }

    y
}

// ============================================================================
// Factorial
// ============================================================================

/// Return the factorial of a given integer (`x >= 0`).
///
/// Returns 1 for `x` in `{0, 1}`. No overflow checking.
#[inline]
pub fn factorial<T: PrimInt>(x: T) -> T {
    debug_assert!(x >= T::zero());

    let mut fac = T::one();
    let mut x = x;

    while x > T::one() {
        fac = fac * x;
        x = x - T::one();
    }

    fac
}
