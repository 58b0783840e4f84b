//! # lumen-foundation — scalar math for an offline rendering engine
//!
//! This crate is the numeric foundation layer of a larger offline renderer.
//! It provides the stateless scalar utilities used throughout the host
//! codebase (vector/matrix math, shading, sampling) plus the plugin seam
//! through which the renderer obtains light-model instances.
//!
//! ## Quick Start
//!
//! ```rust
//! use lumen_foundation::prelude::*;
//!
//! // Angle conversion round-trips within the default tolerance.
//! let a = deg_to_rad(90.0_f64);
//! assert!(feq(rad_to_deg(a), 90.0));
//!
//! // Range remapping with extrapolation outside the source range.
//! assert_eq!(fit(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
//!
//! // Width-aware power-of-two helpers.
//! assert_eq!(next_pow2(1025_u32), 2048);
//! assert!(is_pow2(next_pow2(1025_u32)));
//! ```
//!
//! ## Design
//!
//! * Every scalar operation is a pure free function: no shared state, no
//!   allocation, no blocking. All of them may be called concurrently from
//!   any number of threads.
//! * Preconditions (`clamp` with `min <= max`, `linearstep` with `a < b`,
//!   positive input to `next_pow2`/`log2`, ...) are checked with
//!   `debug_assert!`: fatal in debug builds, unchecked in release builds.
//!   There are no recoverable error returns.
//! * Approximate float comparison is ratio-based and robust to scale;
//!   overflow or underflow of the ratio is reported as inequality rather
//!   than propagating `inf`/`NaN`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for float math:
//!
//! ```toml
//! [dependencies]
//! lumen-foundation = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Scalar - pure numeric free functions.
pub mod scalar;

// Layer 2: Light - plugin seam for pluggable light models.
pub mod light;

// Standard foundation prelude.
pub mod prelude {
    pub use crate::light::{
        common_input_metadata, InputMetadata, Light, LightFactory, ModelMetadata, ParamSet,
        ParamValue,
    };
    pub use crate::scalar::arith::{abs, factorial, pow_const, pow_int, square};
    pub use crate::scalar::bits::{is_pow2, log2, next_pow2, NextPow2};
    pub use crate::scalar::cmp::{feq, feq_eps, fz, fz_eps, ApproxCmp};
    pub use crate::scalar::consts::{HALF_PI, PI, RCP_HALF_PI, RCP_PI, RCP_TWO_PI, TWO_PI};
    pub use crate::scalar::convert::{deg_to_rad, rad_to_deg};
    pub use crate::scalar::interp::{fit, lerp, linearstep, mix, smoothstep};
    pub use crate::scalar::range::{clamp, modulo, normalize_angle, saturate, wrap, Modulo};
    pub use crate::scalar::round::{round, truncate, TruncateFrom};
}
