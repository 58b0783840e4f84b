//! Tests for robust floating-point comparison.
//!
//! These tests verify:
//! - Zero-operand handling (magnitude vs. epsilon, not ratio)
//! - Ratio-based equality at small and very large scales
//! - Overflow/underflow of the ratio reported as inequality
//! - Exact comparison for integer types

use lumen_foundation::prelude::*;

// ============================================================================
// Approximate Equality
// ============================================================================

/// Test equality near zero: magnitudes are compared against eps directly.
#[test]
fn test_feq_zero_operands() {
    assert!(feq_eps(0.0_f64, 1e-10, 1e-6));
    assert!(feq_eps(1e-10_f64, 0.0, 1e-6));
    assert!(feq_eps(-0.0_f64, 1e-10, 1e-6));
    assert!(!feq_eps(0.0_f64, 1e-3, 1e-6));
}

/// Test equality with the default epsilon.
#[test]
fn test_feq_default_eps() {
    assert!(feq(1.0_f64, 1.0 + 1e-15));
    assert!(!feq(1.0_f64, 1.0 + 1e-12));
    assert!(!feq(1.0_f64, 2.0));

    assert!(feq(1.0_f32, 1.0 + 1e-7));
    assert!(!feq(1.0_f32, 1.001));
}

/// Test explicit-epsilon inequality.
#[test]
fn test_feq_explicit_eps() {
    assert!(!feq_eps(1.0_f64, 2.0, 1e-6));
    assert!(feq_eps(1.0_f64, 1.0000001, 1e-3));
    assert!(feq_eps(100.0_f32, 100.001, 1e-3));
}

/// Test that the comparison is robust to operand scale.
#[test]
fn test_feq_scale_robustness() {
    // Huge values compare by ratio, not absolute difference.
    assert!(feq(1e20_f64, 1e20 * (1.0 + 1e-15)));
    assert!(!feq(1e20_f64, 1.0001e20));

    // Tiny nonzero values likewise.
    assert!(feq(1e-18_f64, 1e-18 * (1.0 + 1e-15)));
    assert!(!feq(1e-18_f64, 2e-18));

    // Sign matters: ratio is negative.
    assert!(!feq(1.0_f64, -1.0));
}

/// Test that ratio overflow/underflow is reported as inequality.
#[test]
fn test_feq_overflow_underflow_guards() {
    // lhs/rhs would overflow f32.
    assert!(!feq_eps(1e38_f32, 1e-38, 1e-3));

    // lhs/rhs would underflow f64.
    assert!(!feq_eps(1e-300_f64, 1e300, 1e-3));
    assert!(!feq_eps(1e300_f64, 1e-300, 1e-3));
}

/// Test exact integer comparison; eps is accepted and ignored.
#[test]
fn test_feq_integers() {
    assert!(feq(3_i32, 3));
    assert!(!feq(3_i32, 4));
    assert!(feq_eps(7_i64, 7, 100));
    assert!(!feq_eps(7_i64, 8, 100));
}

// ============================================================================
// Approximate Zero
// ============================================================================

/// Test the zero predicate with default epsilons.
#[test]
fn test_fz_default_eps() {
    assert!(fz(1e-20_f64));
    assert!(fz(-1e-20_f64));
    assert!(!fz(1.0_f64));
    assert!(!fz(1e-10_f64));

    assert!(fz(1e-8_f32));
    assert!(!fz(1e-3_f32));
}

/// Test the zero predicate with explicit epsilons and integers.
#[test]
fn test_fz_explicit_and_integers() {
    assert!(fz_eps(0.01_f64, 0.1));
    assert!(!fz_eps(0.01_f64, 0.001));

    assert!(fz(0_i32));
    assert!(!fz(1_i32));
    assert!(fz_eps(0_i64, 50));
    assert!(!fz_eps(-2_i64, 50));
}
