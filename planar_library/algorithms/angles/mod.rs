//! Angle Arithmetic
//!
//! Bearings between points and shortest signed differences between headings.
//!
//! All results lie in the half-open range (-π, π] for every finite input,
//! including values near `f64::MAX`. Wrap-around is resolved with
//! `atan2(sin d, cos d)` rather than modulo arithmetic, which stays correct
//! at the ±π seam.
//!
//! # Example
//!
//! ```rust
//! use planar_library::algorithms::angles::{angular_difference, bearing};
//!
//! // Robot at origin, target up and to the right
//! let heading_to_target = bearing(0.0, 0.0, 1.0, 1.0).unwrap();
//! assert!((heading_to_target - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//!
//! // Facing -170°, want 170°: turn right 20°, not left 340°
//! let turn = angular_difference(170f64.to_radians(), (-170f64).to_radians()).unwrap();
//! assert!((turn.to_degrees() + 20.0).abs() < 1e-9);
//! ```

use planar_core::{ensure_all_finite, ensure_finite, PlanarResult};
use std::f64::consts::PI;

/// Fold the closed atan2 range [-π, π] onto (-π, π]
///
/// `atan2` returns exactly -π for inputs like `(-0.0, -1.0)`.
pub(crate) fn canonicalize(angle: f64) -> f64 {
    if angle <= -PI {
        PI
    } else {
        angle
    }
}

/// Wrap an arbitrary angle into (-π, π]
pub fn normalize_angle(angle: f64) -> PlanarResult<f64> {
    let angle = ensure_finite("angle", angle)?;
    Ok(canonicalize(angle.sin().atan2(angle.cos())))
}

/// Angle of the line from `(from_x, from_y)` to `(to_x, to_y)`
///
/// Measured counterclockwise from the +X axis of the frame both points are
/// expressed in. When the two points coincide the result is `atan2(0, 0)`,
/// which is 0; this is not treated as an error.
pub fn bearing(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> PlanarResult<f64> {
    ensure_all_finite(&[
        ("from_x", from_x),
        ("from_y", from_y),
        ("to_x", to_x),
        ("to_y", to_y),
    ])?;

    let mut dx = to_x - from_x;
    let mut dy = to_y - from_y;
    if !(dx.is_finite() && dy.is_finite()) {
        // Offsets overflowed; atan2 is scale-invariant, so halve both sides
        dx = to_x / 2.0 - from_x / 2.0;
        dy = to_y / 2.0 - from_y / 2.0;
    }
    Ok(canonicalize(dy.atan2(dx)))
}

/// Smallest signed rotation taking `current_angle` onto `target_angle`
///
/// Positive means counterclockwise (turn left), negative clockwise (turn
/// right). Inputs may be any finite angle. `sin` and `cos` of the difference
/// are expanded with the subtraction identities, so the raw difference is
/// never formed and cannot overflow.
pub fn angular_difference(target_angle: f64, current_angle: f64) -> PlanarResult<f64> {
    ensure_all_finite(&[
        ("target_angle", target_angle),
        ("current_angle", current_angle),
    ])?;

    let (st, ct) = target_angle.sin_cos();
    let (sc, cc) = current_angle.sin_cos();
    let sin_diff = st * cc - ct * sc;
    let cos_diff = ct * cc + st * sc;
    Ok(canonicalize(sin_diff.atan2(cos_diff)))
}
