//! Power-of-two bit tricks.
//!
//! ## Purpose
//!
//! This module provides the power-of-two helpers used for buffer sizing and
//! texture dimensions: rounding up to the next power of two, testing for a
//! power of two, and integer base-2 logarithm.
//!
//! ## Design notes
//!
//! * **Width-specific smears**: `next_pow2` smears the highest set bit down
//!   across the full width of the type before incrementing. 32-bit types
//!   use shift amounts 16,8,4,2,1; 64-bit types additionally need 32.
//! * **Zero edge case**: `is_pow2(0)` returns `true`. Zero is not
//!   mathematically a power of two, but downstream code depends on this
//!   result, so it is part of the contract.
//!
//! ## Invariants
//!
//! * `next_pow2` and `log2` require `x > 0` (asserted in debug builds).
//! * For all `x > 0`: `is_pow2(next_pow2(x))` and `next_pow2(x) >= x`.

// External dependencies
use num_traits::{PrimInt, WrappingSub};

// ============================================================================
// Next Power of Two
// ============================================================================

/// Rounding up to the smallest power of two `>= self`.
///
/// Implemented per integer width so the bit smear covers the full type.
pub trait NextPow2: PrimInt {
    /// Return the smallest power of two `>= self` (`self > 0`).
    fn next_pow2(self) -> Self;
}

macro_rules! impl_next_pow2 {
    ($($t:ty => [$($shift:expr),+]),+ $(,)?) => {
        $(
            impl NextPow2 for $t {
                #[inline]
                fn next_pow2(self) -> Self {
                    debug_assert!(self > 0);
                    let mut x = self - 1;
                    $( x |= x >> $shift; )+
                    x + 1
                }
            }
        )+
    };
}

impl_next_pow2! {
    i32 => [16, 8, 4, 2, 1],
    u32 => [16, 8, 4, 2, 1],
    i64 => [32, 16, 8, 4, 2, 1],
    u64 => [32, 16, 8, 4, 2, 1],
}

/// Return the smallest power of two `>= x` (`x > 0`).
#[inline]
pub fn next_pow2<T: NextPow2>(x: T) -> T {
    x.next_pow2()
}

// ============================================================================
// Power-of-Two Test and Logarithm
// ============================================================================

/// Return `true` if `x` has at most one set bit.
///
/// Note that `is_pow2(0)` returns `true`; see the module docs.
#[inline]
pub fn is_pow2<T>(x: T) -> bool
where
    T: PrimInt + WrappingSub,
{
    x & x.wrapping_sub(&T::one()) == T::zero()
}

/// Return `floor(log2(x))` for `x > 0`, by repeated right-shift counting.
#[inline]
pub fn log2<T: PrimInt>(x: T) -> T {
    debug_assert!(x > T::zero());

    let mut n = T::zero();
    let mut x = x >> 1;

    while !x.is_zero() {
        n = n + T::one();
        x = x >> 1;
    }

    n
}
