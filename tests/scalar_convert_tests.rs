//! Tests for angle conversion.
//!
//! These tests verify degree/radian conversion for:
//! - Exact values at the common reference angles
//! - Round-trip stability within the default epsilon
//! - Both `f32` and `f64`

use approx::assert_relative_eq;

use lumen_foundation::prelude::*;

// ============================================================================
// Reference Values
// ============================================================================

/// Test conversion at common reference angles.
#[test]
fn test_deg_to_rad_reference_values() {
    assert_relative_eq!(deg_to_rad(0.0_f64), 0.0, epsilon = 1e-14);
    assert_relative_eq!(deg_to_rad(90.0_f64), HALF_PI, epsilon = 1e-14);
    assert_relative_eq!(deg_to_rad(180.0_f64), PI, epsilon = 1e-14);
    assert_relative_eq!(deg_to_rad(360.0_f64), TWO_PI, epsilon = 1e-14);
}

/// Test conversion back to degrees.
#[test]
fn test_rad_to_deg_reference_values() {
    assert_relative_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-12);
    assert_relative_eq!(rad_to_deg(HALF_PI), 90.0, epsilon = 1e-12);
    assert_relative_eq!(rad_to_deg(-PI), -180.0, epsilon = 1e-12);
}

// ============================================================================
// Round-Trip Properties
// ============================================================================

/// Test that deg -> rad -> deg round-trips within the default epsilon.
#[test]
fn test_round_trip_f64() {
    let angles = [-720.0, -180.0, -1.0, 0.5, 1.0, 33.3, 90.0, 179.9, 5000.0];

    for &a in angles.iter() {
        assert!(feq(rad_to_deg(deg_to_rad(a)), a), "round trip failed at {a}");
        assert!(
            feq(deg_to_rad(rad_to_deg(a)), a),
            "reverse round trip failed at {a}"
        );
    }
}

/// Test round-trip stability with `f32`.
#[test]
fn test_round_trip_f32() {
    let angles = [-180.0_f32, -10.5, 0.25, 45.0, 360.0];

    for &a in angles.iter() {
        assert!(feq(rad_to_deg(deg_to_rad(a)), a), "round trip failed at {a}");
    }
}
