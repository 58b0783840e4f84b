//! Truncation and rounding to integer types.
//!
//! ## Purpose
//!
//! This module converts floating-point values to integers: truncation
//! toward zero (the hot path in sampling and rasterization code) and
//! round-half-away-from-zero.
//!
//! ## Design notes
//!
//! * **Fast path**: with the `sse` feature on x86-64, `i32` truncation uses
//!   the `cvttss`/`cvttsd` instructions directly. The portable truncating
//!   cast is the behavioral reference; the two paths are numerically
//!   equivalent for values representable in the target type, and tests
//!   compare them.
//! * **Tie breaking**: `round` uses Round Half Away from Zero, so
//!   `round(2.5) == 3` and `round(-2.5) == -3`.
//!
//! ## Invariants
//!
//! * Input must be finite and representable in the target integer type.

// External dependencies
use num_traits::Float;

// ============================================================================
// Truncation
// ============================================================================

/// Truncation toward zero from a floating-point type.
pub trait TruncateFrom<F>: Sized {
    /// Return the integer part of `x`.
    fn truncate_from(x: F) -> Self;
}

impl TruncateFrom<f32> for i32 {
    #[inline]
    fn truncate_from(x: f32) -> Self {
        #[cfg(all(feature = "sse", target_arch = "x86_64"))]
        {
            use core::arch::x86_64::{_mm_cvttss_si32, _mm_set_ss};
            // SAFETY: SSE2 is part of the x86-64 baseline.
            unsafe { _mm_cvttss_si32(_mm_set_ss(x)) }
        }
        #[cfg(not(all(feature = "sse", target_arch = "x86_64")))]
        {
            x as i32
        }
    }
}

impl TruncateFrom<f64> for i32 {
    #[inline]
    fn truncate_from(x: f64) -> Self {
        #[cfg(all(feature = "sse", target_arch = "x86_64"))]
        {
            use core::arch::x86_64::{_mm_cvttsd_si32, _mm_set_sd};
            // SAFETY: SSE2 is part of the x86-64 baseline.
            unsafe { _mm_cvttsd_si32(_mm_set_sd(x)) }
        }
        #[cfg(not(all(feature = "sse", target_arch = "x86_64")))]
        {
            x as i32
        }
    }
}

impl TruncateFrom<f32> for i64 {
    #[inline]
    fn truncate_from(x: f32) -> Self {
        x as i64
    }
}

impl TruncateFrom<f64> for i64 {
    #[inline]
    fn truncate_from(x: f64) -> Self {
        x as i64
    }
}

/// Return the integer part of a floating-point value.
#[inline]
pub fn truncate<I, F>(x: F) -> I
where
    I: TruncateFrom<F>,
{
    I::truncate_from(x)
}

// ============================================================================
// Rounding
// ============================================================================

/// Round `x` to the nearest integer with the Round Half Away from Zero tie
/// breaking rule.
#[inline]
pub fn round<I, F>(x: F) -> I
where
    I: TruncateFrom<F>,
    F: Float,
{
    let half = F::from(0.5).unwrap();
    truncate(if x < F::zero() { x - half } else { x + half })
}
